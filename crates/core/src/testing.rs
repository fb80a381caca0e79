//! In-memory repositories and fixtures shared by the service tests.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::directory::{Agent, Builder, DirectoryRepositoryTrait, NewAgent, NewBuilder};
use crate::errors::{DatabaseError, Error, Result};
use crate::favorites::{Favorite, FavoriteRepositoryTrait};
use crate::investments::{Investment, InvestmentRepositoryTrait, NewInvestment};
use crate::properties::{
    EquityTerms, NewProperty, Property, PropertyKind, PropertyRepositoryTrait, PropertyStatus,
    PropertyUpdate,
};
use crate::users::{
    KycRecord, KycStatus, KycSubmission, NewUser, ProfileUpdate, User, UserCredentials,
    UserRepositoryTrait, UserRole,
};

fn missing(what: &str) -> Error {
    Error::Database(DatabaseError::NotFound(what.to_string()))
}

pub fn timestamp(minutes_ago: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
        - Duration::minutes(minutes_ago)
}

// ============================================================================
// Fixtures
// ============================================================================

/// 1000 shares at 100,000 with 850,000 monthly rental and 8.5% appreciation.
pub fn equity_terms() -> EquityTerms {
    EquityTerms {
        price_per_share: dec!(100000),
        total_shares: 1000,
        available_shares: 1000,
        monthly_rental: dec!(850000),
        appreciation_rate: dec!(8.5),
        min_investment: dec!(100000),
    }
}

pub fn residential(id: &str, title: &str, city: &str, price: Decimal, age: i64) -> Property {
    Property {
        id: id.to_string(),
        title: title.to_string(),
        description: None,
        kind: PropertyKind::Residential,
        status: PropertyStatus::Available,
        city: city.to_string(),
        location: format!("{} central", city),
        price,
        area_sqft: Some(1200),
        bedrooms: Some(3),
        builder_id: None,
        agent_id: None,
        image_url: None,
        equity: None,
        created_at: timestamp(age),
        updated_at: timestamp(age),
    }
}

pub fn commercial(id: &str, title: &str, city: &str, terms: EquityTerms, age: i64) -> Property {
    Property {
        kind: PropertyKind::Commercial,
        price: terms.price_per_share * Decimal::from(terms.total_shares),
        area_sqft: Some(25000),
        bedrooms: None,
        equity: Some(terms),
        ..residential(id, title, city, Decimal::ONE, age)
    }
}

pub fn user(id: &str, kyc_status: KycStatus) -> User {
    User {
        id: id.to_string(),
        email: format!("{}@example.com", id),
        full_name: format!("User {}", id),
        phone: None,
        role: UserRole::Investor,
        kyc_status,
        created_at: timestamp(1000),
        updated_at: timestamp(1000),
    }
}

// ============================================================================
// Properties
// ============================================================================

#[derive(Default)]
pub struct InMemoryPropertyRepository {
    pub properties: Mutex<Vec<Property>>,
}

impl InMemoryPropertyRepository {
    pub fn with(properties: Vec<Property>) -> Arc<Self> {
        Arc::new(Self {
            properties: Mutex::new(properties),
        })
    }

    pub fn available_shares(&self, property_id: &str) -> Option<u64> {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == property_id)
            .and_then(|p| p.equity.map(|e| e.available_shares))
    }
}

#[async_trait]
impl PropertyRepositoryTrait for InMemoryPropertyRepository {
    fn get_by_id(&self, property_id: &str) -> Result<Property> {
        self.properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == property_id)
            .cloned()
            .ok_or_else(|| missing(property_id))
    }

    fn list(&self) -> Result<Vec<Property>> {
        Ok(self.properties.lock().unwrap().clone())
    }

    async fn create(&self, new_property: NewProperty) -> Result<Property> {
        let mut properties = self.properties.lock().unwrap();
        let property = Property {
            id: new_property
                .id
                .unwrap_or_else(|| format!("property-{}", properties.len() + 1)),
            title: new_property.title,
            description: new_property.description,
            kind: new_property.kind,
            status: new_property.status,
            city: new_property.city,
            location: new_property.location,
            price: new_property.price,
            area_sqft: new_property.area_sqft,
            bedrooms: new_property.bedrooms,
            builder_id: new_property.builder_id,
            agent_id: new_property.agent_id,
            image_url: new_property.image_url,
            equity: new_property.equity,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        properties.push(property.clone());
        Ok(property)
    }

    async fn update(&self, update: PropertyUpdate) -> Result<Property> {
        let mut properties = self.properties.lock().unwrap();
        let existing = properties
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| missing(&update.id))?;
        existing.title = update.title;
        existing.description = update.description;
        existing.kind = update.kind;
        existing.status = update.status;
        existing.city = update.city;
        existing.location = update.location;
        existing.price = update.price;
        existing.area_sqft = update.area_sqft;
        existing.bedrooms = update.bedrooms;
        existing.builder_id = update.builder_id;
        existing.agent_id = update.agent_id;
        existing.image_url = update.image_url;
        existing.equity = update.equity;
        existing.updated_at = Utc::now().naive_utc();
        Ok(existing.clone())
    }

    async fn delete(&self, property_id: &str) -> Result<usize> {
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| p.id != property_id);
        Ok(before - properties.len())
    }
}

// ============================================================================
// Directory
// ============================================================================

#[derive(Default)]
pub struct InMemoryDirectoryRepository {
    pub builders: Mutex<Vec<Builder>>,
    pub agents: Mutex<Vec<Agent>>,
}

impl InMemoryDirectoryRepository {
    pub fn with_builder(id: &str, name: &str) -> Arc<Self> {
        let repo = Self::default();
        repo.builders.lock().unwrap().push(Builder {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            established_year: Some(1998),
            city: None,
            website: None,
            logo_url: None,
            created_at: timestamp(0),
        });
        Arc::new(repo)
    }
}

#[async_trait]
impl DirectoryRepositoryTrait for InMemoryDirectoryRepository {
    fn list_builders(&self) -> Result<Vec<Builder>> {
        Ok(self.builders.lock().unwrap().clone())
    }

    fn get_builder(&self, builder_id: &str) -> Result<Builder> {
        self.builders
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == builder_id)
            .cloned()
            .ok_or_else(|| missing(builder_id))
    }

    async fn create_builder(&self, new_builder: NewBuilder) -> Result<Builder> {
        let mut builders = self.builders.lock().unwrap();
        let builder = Builder {
            id: new_builder
                .id
                .unwrap_or_else(|| format!("builder-{}", builders.len() + 1)),
            name: new_builder.name,
            description: new_builder.description,
            established_year: new_builder.established_year,
            city: new_builder.city,
            website: new_builder.website,
            logo_url: new_builder.logo_url,
            created_at: Utc::now().naive_utc(),
        };
        builders.push(builder.clone());
        Ok(builder)
    }

    fn list_agents(&self) -> Result<Vec<Agent>> {
        Ok(self.agents.lock().unwrap().clone())
    }

    fn get_agent(&self, agent_id: &str) -> Result<Agent> {
        self.agents
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == agent_id)
            .cloned()
            .ok_or_else(|| missing(agent_id))
    }

    async fn create_agent(&self, new_agent: NewAgent) -> Result<Agent> {
        let mut agents = self.agents.lock().unwrap();
        let agent = Agent {
            id: new_agent
                .id
                .unwrap_or_else(|| format!("agent-{}", agents.len() + 1)),
            name: new_agent.name,
            email: new_agent.email,
            phone: new_agent.phone,
            agency: new_agent.agency,
            city: new_agent.city,
            rating: new_agent.rating,
            created_at: Utc::now().naive_utc(),
        };
        agents.push(agent.clone());
        Ok(agent)
    }
}

// ============================================================================
// Favorites
// ============================================================================

/// Keeps insertion order; listing returns newest first.
#[derive(Default)]
pub struct InMemoryFavoriteRepository {
    pub favorites: Mutex<Vec<Favorite>>,
}

impl InMemoryFavoriteRepository {
    fn position(favorites: &[Favorite], user_id: &str, property_id: &str) -> Option<usize> {
        favorites
            .iter()
            .position(|f| f.user_id == user_id && f.property_id == property_id)
    }
}

#[async_trait]
impl FavoriteRepositoryTrait for InMemoryFavoriteRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Favorite>> {
        Ok(self
            .favorites
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect())
    }

    fn count_for_user(&self, user_id: &str) -> Result<usize> {
        Ok(self.list_for_user(user_id)?.len())
    }

    async fn add(&self, user_id: &str, property_id: &str) -> Result<bool> {
        let mut favorites = self.favorites.lock().unwrap();
        if Self::position(&favorites, user_id, property_id).is_some() {
            return Ok(false);
        }
        favorites.push(Favorite {
            user_id: user_id.to_string(),
            property_id: property_id.to_string(),
            created_at: Utc::now().naive_utc(),
        });
        Ok(true)
    }

    async fn remove(&self, user_id: &str, property_id: &str) -> Result<usize> {
        let mut favorites = self.favorites.lock().unwrap();
        match Self::position(&favorites, user_id, property_id) {
            Some(index) => {
                favorites.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn toggle(&self, user_id: &str, property_id: &str) -> Result<bool> {
        if self.remove(user_id, property_id).await? == 1 {
            return Ok(false);
        }
        self.add(user_id, property_id).await
    }
}

// ============================================================================
// Investments
// ============================================================================

pub struct InMemoryInvestmentRepository {
    pub investments: Mutex<Vec<Investment>>,
    properties: Arc<InMemoryPropertyRepository>,
}

impl InMemoryInvestmentRepository {
    pub fn new(properties: Arc<InMemoryPropertyRepository>) -> Arc<Self> {
        Arc::new(Self {
            investments: Mutex::new(Vec::new()),
            properties,
        })
    }

    pub fn seed(&self, investment: Investment) {
        self.investments.lock().unwrap().push(investment);
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InMemoryInvestmentRepository {
    fn list_for_user(&self, user_id: &str) -> Result<Vec<Investment>> {
        Ok(self
            .investments
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect())
    }

    fn get_by_id(&self, investment_id: &str) -> Result<Investment> {
        self.investments
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == investment_id)
            .cloned()
            .ok_or_else(|| missing(investment_id))
    }

    async fn purchase(&self, new_investment: NewInvestment) -> Result<Investment> {
        {
            let mut properties = self.properties.properties.lock().unwrap();
            let property = properties
                .iter_mut()
                .find(|p| p.id == new_investment.property_id)
                .ok_or_else(|| missing(&new_investment.property_id))?;
            if property.status != PropertyStatus::Available {
                return Err(Error::ConstraintViolation(format!(
                    "Property {} is {}",
                    property.id,
                    property.status.as_str()
                )));
            }
            let terms = property
                .equity
                .as_mut()
                .ok_or_else(|| Error::ConstraintViolation("no equity terms".to_string()))?;
            if terms.available_shares < new_investment.shares {
                return Err(Error::ConstraintViolation(format!(
                    "Only {} shares are available",
                    terms.available_shares
                )));
            }
            terms.available_shares -= new_investment.shares;
            if terms.available_shares == 0 {
                property.status = PropertyStatus::SoldOut;
            }
        }
        let mut investments = self.investments.lock().unwrap();
        let investment = Investment {
            id: format!("investment-{}", investments.len() + 1),
            user_id: new_investment.user_id,
            property_id: new_investment.property_id,
            shares: new_investment.shares,
            price_per_share: new_investment.price_per_share,
            amount: new_investment.amount,
            created_at: Utc::now().naive_utc(),
        };
        investments.push(investment.clone());
        Ok(investment)
    }
}

// ============================================================================
// Users
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    pub users: Mutex<Vec<(User, String)>>,
    pub kyc: Mutex<HashMap<String, KycRecord>>,
}

impl InMemoryUserRepository {
    pub fn with(users: Vec<User>) -> Arc<Self> {
        Arc::new(Self {
            users: Mutex::new(
                users
                    .into_iter()
                    .map(|u| (u, "$argon2id$fixture".to_string()))
                    .collect(),
            ),
            kyc: Mutex::new(HashMap::new()),
        })
    }

    fn set_user_status(&self, user_id: &str, status: KycStatus) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        let (user, _) = users
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or_else(|| missing(user_id))?;
        user.kyc_status = status;
        Ok(())
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    fn get_by_id(&self, user_id: &str) -> Result<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.id == user_id)
            .map(|(u, _)| u.clone())
            .ok_or_else(|| missing(user_id))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    fn get_credentials(&self, email: &str) -> Result<Option<UserCredentials>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, hash)| UserCredentials {
                user_id: u.id.clone(),
                email: u.email.clone(),
                password_hash: hash.clone(),
            }))
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let user = User {
            id: format!("user-{}", users.len() + 1),
            email: new_user.email,
            full_name: new_user.full_name,
            phone: new_user.phone,
            role: new_user.role,
            kyc_status: KycStatus::NotStarted,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        };
        users.push((user.clone(), new_user.password_hash));
        Ok(user)
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<User> {
        let mut users = self.users.lock().unwrap();
        let (user, _) = users
            .iter_mut()
            .find(|(u, _)| u.id == user_id)
            .ok_or_else(|| missing(user_id))?;
        user.full_name = update.full_name;
        user.phone = update.phone;
        Ok(user.clone())
    }

    fn get_kyc(&self, user_id: &str) -> Result<Option<KycRecord>> {
        Ok(self.kyc.lock().unwrap().get(user_id).cloned())
    }

    async fn save_kyc_submission(
        &self,
        user_id: &str,
        submission: KycSubmission,
    ) -> Result<KycRecord> {
        let current = self.get_by_id(user_id)?.kyc_status;
        if !current.accepts_submission() {
            return Err(Error::ConstraintViolation(format!(
                "KYC cannot be submitted while status is {}",
                current.as_str()
            )));
        }
        self.set_user_status(user_id, KycStatus::Pending)?;
        let record = KycRecord {
            user_id: user_id.to_string(),
            document_type: submission.document_type,
            document_number: submission.document_number,
            date_of_birth: submission.date_of_birth,
            status: KycStatus::Pending,
            review_note: None,
            submitted_at: Utc::now().naive_utc(),
            reviewed_at: None,
        };
        self.kyc
            .lock()
            .unwrap()
            .insert(user_id.to_string(), record.clone());
        Ok(record)
    }

    async fn set_kyc_status(
        &self,
        user_id: &str,
        status: KycStatus,
        note: Option<String>,
    ) -> Result<KycRecord> {
        let mut kyc = self.kyc.lock().unwrap();
        let record = kyc.get_mut(user_id).ok_or_else(|| missing(user_id))?;
        if record.status != KycStatus::Pending {
            return Err(Error::ConstraintViolation(format!(
                "KYC for user {} is not pending review",
                user_id
            )));
        }
        self.set_user_status(user_id, status)?;
        record.status = status;
        record.review_note = note;
        record.reviewed_at = Some(Utc::now().naive_utc());
        Ok(record.clone())
    }
}
