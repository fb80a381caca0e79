#[cfg(test)]
mod tests {
    use crate::dashboard::{DashboardService, DashboardServiceTrait};
    use crate::favorites::FavoriteRepositoryTrait;
    use crate::investments::Investment;
    use crate::projection::project;
    use crate::properties::EquityTerms;
    use crate::testing::{
        commercial, equity_terms, timestamp, user, InMemoryFavoriteRepository,
        InMemoryInvestmentRepository, InMemoryPropertyRepository, InMemoryUserRepository,
    };
    use crate::users::KycStatus;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn investment(id: &str, property_id: &str, shares: u64, price: Decimal) -> Investment {
        Investment {
            id: id.to_string(),
            user_id: "u1".to_string(),
            property_id: property_id.to_string(),
            shares,
            price_per_share: price,
            amount: price * Decimal::from(shares),
            created_at: timestamp(0),
        }
    }

    struct Fixture {
        favorites: Arc<InMemoryFavoriteRepository>,
        investments: Arc<InMemoryInvestmentRepository>,
        service: DashboardService,
    }

    fn fixture() -> Fixture {
        let cheaper = EquityTerms {
            price_per_share: dec!(50000),
            total_shares: 2000,
            monthly_rental: dec!(500000),
            appreciation_rate: dec!(6),
            ..equity_terms()
        };
        let properties = InMemoryPropertyRepository::with(vec![
            commercial("p1", "Tech Park Tower", "Bengaluru", equity_terms(), 10),
            commercial("p2", "Harbour Plaza", "Mumbai", cheaper, 20),
        ]);
        let investments = InMemoryInvestmentRepository::new(properties.clone());
        let favorites = Arc::new(InMemoryFavoriteRepository::default());
        let users = InMemoryUserRepository::with(vec![user("u1", KycStatus::Approved)]);
        let service = DashboardService::new(
            users,
            favorites.clone(),
            investments.clone(),
            properties,
        );
        Fixture {
            favorites,
            investments,
            service,
        }
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = fixture().service.get_summary("u1").unwrap();
        assert_eq!(summary.user.id, "u1");
        assert_eq!(summary.kyc_status, KycStatus::Approved);
        assert_eq!(summary.holdings_count, 0);
        assert_eq!(summary.total_invested, Decimal::ZERO);
        assert_eq!(summary.projected_value_5y, Decimal::ZERO);
        assert!(summary.holdings.is_empty());
    }

    #[tokio::test]
    async fn test_holdings_are_grouped_per_property() {
        let f = fixture();
        f.investments
            .seed(investment("i1", "p1", 3, dec!(100000)));
        f.investments
            .seed(investment("i2", "p1", 2, dec!(100000)));
        f.investments
            .seed(investment("i3", "p2", 4, dec!(50000)));
        f.favorites.add("u1", "p2").await.unwrap();

        let summary = f.service.get_summary("u1").unwrap();
        assert_eq!(summary.favorites_count, 1);
        assert_eq!(summary.holdings_count, 2);
        assert_eq!(summary.total_shares, 9);
        assert_eq!(summary.total_invested, dec!(700000));

        // Largest position first
        let tower = &summary.holdings[0];
        assert_eq!(tower.property_id, "p1");
        assert_eq!(tower.shares, 5);
        assert_eq!(tower.ownership_percentage, dec!(0.5));
        assert_eq!(tower.monthly_rental, dec!(4250));

        let plaza = &summary.holdings[1];
        assert_eq!(plaza.ownership_percentage, dec!(0.2));
        assert_eq!(plaza.monthly_rental, dec!(1000));
        assert_eq!(summary.monthly_rental_income, dec!(5250));
    }

    #[test]
    fn test_projected_value_uses_five_year_horizon() {
        let f = fixture();
        f.investments
            .seed(investment("i1", "p1", 5, dec!(100000)));

        let summary = f.service.get_summary("u1").unwrap();
        let expected = project(dec!(500000), 5, 1000, dec!(850000), dec!(8.5))
            .unwrap()
            .horizon(5)
            .unwrap()
            .projected_value;
        assert_eq!(summary.projected_value_5y, expected);
        assert!(summary.projected_value_5y > dec!(750000));
    }

    #[test]
    fn test_missing_property_is_skipped() {
        let f = fixture();
        f.investments
            .seed(investment("i1", "gone", 5, dec!(100000)));
        f.investments
            .seed(investment("i2", "p2", 1, dec!(50000)));

        let summary = f.service.get_summary("u1").unwrap();
        assert_eq!(summary.holdings_count, 1);
        assert_eq!(summary.total_invested, dec!(50000));
    }

    #[test]
    fn test_unknown_user_fails() {
        assert!(fixture()
            .service
            .get_summary("ghost")
            .unwrap_err()
            .is_not_found());
    }
}
