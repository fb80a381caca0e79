use log::warn;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;

use super::dashboard_model::{DashboardSummary, HoldingSummary};
use crate::errors::Result;
use crate::favorites::FavoriteRepositoryTrait;
use crate::investments::{Investment, InvestmentRepositoryTrait};
use crate::projection::project;
use crate::properties::PropertyRepositoryTrait;
use crate::users::UserRepositoryTrait;

/// Trait for dashboard service operations
pub trait DashboardServiceTrait: Send + Sync {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary>;
}

pub struct DashboardService {
    user_repository: Arc<dyn UserRepositoryTrait>,
    favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
    investment_repository: Arc<dyn InvestmentRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
}

impl DashboardService {
    pub fn new(
        user_repository: Arc<dyn UserRepositoryTrait>,
        favorite_repository: Arc<dyn FavoriteRepositoryTrait>,
        investment_repository: Arc<dyn InvestmentRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
    ) -> Self {
        Self {
            user_repository,
            favorite_repository,
            investment_repository,
            property_repository,
        }
    }

    fn summarize_holding(
        &self,
        property_id: &str,
        investments: &[Investment],
    ) -> Result<Option<HoldingSummary>> {
        let property = match self.property_repository.get_by_id(property_id) {
            Ok(p) => p,
            Err(e) if e.is_not_found() => {
                warn!("Holding references missing property {}", property_id);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        let shares: u64 = investments.iter().map(|i| i.shares).sum();
        let invested_amount: Decimal = investments.iter().map(|i| i.amount).sum();

        let Some(terms) = property.equity.as_ref() else {
            warn!("Holding in {} has no equity terms", property_id);
            return Ok(None);
        };
        if invested_amount <= Decimal::ZERO {
            return Ok(None);
        }
        let projection = project(
            invested_amount,
            shares,
            terms.total_shares,
            terms.monthly_rental,
            terms.appreciation_rate,
        )?;
        let projected_value_5y = projection
            .horizon(5)
            .map(|h| h.projected_value)
            .unwrap_or(invested_amount);

        Ok(Some(HoldingSummary {
            property_id: property.id,
            property_title: property.title,
            shares,
            invested_amount,
            ownership_percentage: projection.ownership_percentage,
            monthly_rental: projection.monthly_rental,
            projected_value_5y,
        }))
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_summary(&self, user_id: &str) -> Result<DashboardSummary> {
        let user = self.user_repository.get_by_id(user_id)?;
        let favorites_count = self.favorite_repository.count_for_user(user_id)?;

        let mut by_property: BTreeMap<String, Vec<Investment>> = BTreeMap::new();
        for investment in self.investment_repository.list_for_user(user_id)? {
            by_property
                .entry(investment.property_id.clone())
                .or_default()
                .push(investment);
        }

        let mut holdings = Vec::with_capacity(by_property.len());
        for (property_id, investments) in &by_property {
            if let Some(holding) = self.summarize_holding(property_id, investments)? {
                holdings.push(holding);
            }
        }
        holdings.sort_by(|a, b| b.invested_amount.cmp(&a.invested_amount));

        Ok(DashboardSummary {
            kyc_status: user.kyc_status,
            favorites_count,
            holdings_count: holdings.len(),
            total_invested: holdings.iter().map(|h| h.invested_amount).sum(),
            total_shares: holdings.iter().map(|h| h.shares).sum(),
            monthly_rental_income: holdings.iter().map(|h| h.monthly_rental).sum(),
            projected_value_5y: holdings.iter().map(|h| h.projected_value_5y).sum(),
            holdings,
            user,
        })
    }
}
