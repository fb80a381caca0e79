//! Investments module - calculator and buy-shares flow.

mod investments_model;
mod investments_service;
mod investments_traits;

pub use investments_model::{
    BuySharesRequest, CalculatorInput, Investment, InvestmentCalculation, NewInvestment,
};
pub use investments_service::InvestmentService;
pub use investments_traits::{InvestmentRepositoryTrait, InvestmentServiceTrait};
