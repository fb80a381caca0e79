use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::investments_model::{
    BuySharesRequest, CalculatorInput, Investment, InvestmentCalculation, NewInvestment,
};
use super::investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
use crate::errors::{Error, Result};
use crate::projection::InvestmentQuote;
use crate::properties::{EquityTerms, Property, PropertyRepositoryTrait, PropertyStatus};
use crate::users::{KycStatus, UserRepositoryTrait};

/// Calculator and purchase flow for fractional equity listings.
///
/// Business bounds (minimum investment, available shares) are enforced here,
/// before the projector runs.
pub struct InvestmentService {
    repository: Arc<dyn InvestmentRepositoryTrait>,
    property_repository: Arc<dyn PropertyRepositoryTrait>,
    user_repository: Arc<dyn UserRepositoryTrait>,
}

impl InvestmentService {
    pub fn new(
        repository: Arc<dyn InvestmentRepositoryTrait>,
        property_repository: Arc<dyn PropertyRepositoryTrait>,
        user_repository: Arc<dyn UserRepositoryTrait>,
    ) -> Self {
        Self {
            repository,
            property_repository,
            user_repository,
        }
    }

    fn load_property(&self, property_id: &str) -> Result<Property> {
        self.property_repository.get_by_id(property_id).map_err(|e| {
            if e.is_not_found() {
                Error::NotFound(format!("Property {}", property_id))
            } else {
                e
            }
        })
    }
}

/// Rejects quotes outside the listing's bounds.
fn check_bounds(quote: &InvestmentQuote, terms: &EquityTerms) -> Result<()> {
    if quote.principal < terms.min_investment {
        return Err(Error::invalid_input(format!(
            "Minimum investment is {}",
            terms.min_investment
        )));
    }
    if quote.share_count == 0 {
        return Err(Error::invalid_input(format!(
            "Amount {} does not cover one share at {}",
            quote.principal, terms.price_per_share
        )));
    }
    if quote.share_count > terms.available_shares {
        return Err(Error::invalid_input(format!(
            "Only {} shares are available",
            terms.available_shares
        )));
    }
    Ok(())
}

#[async_trait]
impl InvestmentServiceTrait for InvestmentService {
    fn calculate(
        &self,
        property_id: &str,
        input: CalculatorInput,
    ) -> Result<InvestmentCalculation> {
        let property = self.load_property(property_id)?;
        let terms = property.require_equity()?;

        let quote = match input {
            CalculatorInput::Amount(amount) => {
                if amount <= Decimal::ZERO {
                    return Err(Error::invalid_input("Investment amount must be positive"));
                }
                InvestmentQuote::from_amount(amount, terms)?
            }
            CalculatorInput::Shares(shares) => InvestmentQuote::from_shares(shares, terms)?,
        };
        check_bounds(&quote, terms)?;

        let projection = quote.project()?;
        debug!(
            "Projected {} shares of {} for principal {}",
            quote.share_count, property_id, quote.principal
        );
        Ok(InvestmentCalculation {
            property_id: property.id.clone(),
            invested_amount: quote.invested_amount(),
            quote,
            projection,
        })
    }

    async fn buy_shares(&self, user_id: &str, request: BuySharesRequest) -> Result<Investment> {
        let user = self.user_repository.get_by_id(user_id)?;
        if user.kyc_status != KycStatus::Approved {
            return Err(Error::PermissionDenied(
                "KYC verification must be approved before investing".to_string(),
            ));
        }
        if request.shares == 0 {
            return Err(Error::invalid_input("At least one share must be purchased"));
        }

        let property = self.load_property(&request.property_id)?;
        if property.status != PropertyStatus::Available {
            return Err(Error::ConstraintViolation(format!(
                "Property {} is {}",
                property.id,
                property.status.as_str()
            )));
        }
        let terms = property.require_equity()?;
        let quote = InvestmentQuote::from_shares(request.shares, terms)?;
        if quote.share_count > terms.available_shares {
            return Err(Error::ConstraintViolation(format!(
                "Only {} shares are available",
                terms.available_shares
            )));
        }
        check_bounds(&quote, terms)?;

        let investment = self
            .repository
            .purchase(NewInvestment {
                user_id: user.id.clone(),
                property_id: property.id.clone(),
                shares: quote.share_count,
                price_per_share: quote.price_per_share,
                amount: quote.invested_amount(),
            })
            .await?;
        info!(
            "User {} bought {} shares of {} for {}",
            user.id, investment.shares, investment.property_id, investment.amount
        );
        Ok(investment)
    }

    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        self.repository.list_for_user(user_id)
    }

    fn get_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment> {
        let not_found = || Error::NotFound(format!("Investment {}", investment_id));
        let investment = self.repository.get_by_id(investment_id).map_err(|e| {
            if e.is_not_found() {
                not_found()
            } else {
                e
            }
        })?;
        // Other users' investments are reported as missing.
        if investment.user_id != user_id {
            return Err(not_found());
        }
        Ok(investment)
    }
}
