use crate::errors::Result;
use crate::investments::investments_model::{
    BuySharesRequest, CalculatorInput, Investment, InvestmentCalculation, NewInvestment,
};
use async_trait::async_trait;

/// Trait for investment repository operations
#[async_trait]
pub trait InvestmentRepositoryTrait: Send + Sync {
    /// Investments of a user, newest first.
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_by_id(&self, investment_id: &str) -> Result<Investment>;
    /// Atomically reserves `shares` on the property and records the purchase.
    ///
    /// Listing status, buyer KYC and the share count are re-checked in the
    /// same write: `PermissionDenied` unless the buyer's KYC is `APPROVED`,
    /// `ConstraintViolation` unless the listing is `AVAILABLE` with enough
    /// shares. Marks the listing `SOLD_OUT` when it reaches zero.
    async fn purchase(&self, new_investment: NewInvestment) -> Result<Investment>;
}

/// Trait for investment service operations
#[async_trait]
pub trait InvestmentServiceTrait: Send + Sync {
    fn calculate(&self, property_id: &str, input: CalculatorInput)
        -> Result<InvestmentCalculation>;
    async fn buy_shares(&self, user_id: &str, request: BuySharesRequest) -> Result<Investment>;
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>>;
    fn get_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment>;
}
