//! Seller service management.
//!
//! Each operation starts from the directory's copy of the seller (falling back
//! to the snapshot the view holds), applies one change to `services`, and
//! commits the whole record through [`commit_user`]. The updated record is
//! returned so the caller can refresh its session state.

use store::{current_timestamp_ms, KeyValueStore, Repository, ServiceId, ServiceRecord, UserRecord};

use crate::error::MarketError;
use crate::session::commit_user;

/// Fields of the create/edit service form. `price` is the raw input text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
}

impl ServiceForm {
    /// Pre-fill the form for editing an existing service.
    pub fn from_service(service: &ServiceRecord) -> Self {
        Self {
            title: service.title.clone(),
            description: service.description.clone(),
            price: service.price.to_string(),
            image: service.image.clone(),
        }
    }

    fn parse_price(&self) -> Result<f64, MarketError> {
        match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => Ok(p),
            _ => Err(MarketError::InvalidPrice(self.price.clone())),
        }
    }

    fn into_record(self, id: ServiceId) -> Result<ServiceRecord, MarketError> {
        let price = self.parse_price()?;
        Ok(ServiceRecord {
            id,
            title: self.title,
            description: self.description,
            price,
            image: self.image,
        })
    }
}

/// Next service id for a seller: the current time in milliseconds, bumped past
/// the highest existing id so two creations in one millisecond still differ.
pub fn next_service_id(existing: &[ServiceRecord], now_ms: u64) -> ServiceId {
    let floor = existing
        .iter()
        .map(|s| s.id.0.saturating_add(1))
        .max()
        .unwrap_or(0);
    ServiceId(now_ms.max(floor))
}

fn load_seller<S: KeyValueStore>(
    repo: &Repository<S>,
    owner: &UserRecord,
) -> Result<UserRecord, MarketError> {
    if !owner.is_seller {
        return Err(MarketError::NotASeller);
    }
    Ok(repo
        .find_user(&owner.username)?
        .unwrap_or_else(|| owner.clone()))
}

/// Append a new service to the seller's list.
pub fn create_service<S: KeyValueStore>(
    repo: &Repository<S>,
    owner: &UserRecord,
    form: ServiceForm,
) -> Result<UserRecord, MarketError> {
    let mut user = load_seller(repo, owner)?;
    let id = next_service_id(&user.services, current_timestamp_ms());
    user.services.push(form.into_record(id)?);
    commit_user(repo, &user)?;
    tracing::info!(username = %user.username, service = %id, "service created");
    Ok(user)
}

/// Replace the service with `id` in place, keeping its id and position.
pub fn update_service<S: KeyValueStore>(
    repo: &Repository<S>,
    owner: &UserRecord,
    id: ServiceId,
    form: ServiceForm,
) -> Result<UserRecord, MarketError> {
    let mut user = load_seller(repo, owner)?;
    let record = form.into_record(id)?;
    let slot = user
        .services
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(MarketError::ServiceNotFound(id))?;
    *slot = record;
    commit_user(repo, &user)?;
    tracing::info!(username = %user.username, service = %id, "service updated");
    Ok(user)
}

/// Remove the service with `id`.
pub fn delete_service<S: KeyValueStore>(
    repo: &Repository<S>,
    owner: &UserRecord,
    id: ServiceId,
) -> Result<UserRecord, MarketError> {
    let mut user = load_seller(repo, owner)?;
    let before = user.services.len();
    user.services.retain(|s| s.id != id);
    if user.services.len() == before {
        return Err(MarketError::ServiceNotFound(id));
    }
    commit_user(repo, &user)?;
    tracing::info!(username = %user.username, service = %id, "service deleted");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{sign_up, SignUpForm};
    use crate::testing::repo;
    use store::MemoryStore;

    fn seller(repo: &Repository<MemoryStore>) -> UserRecord {
        sign_up(
            repo,
            SignUpForm {
                username: "sara".to_string(),
                email: "sara@example.com".to_string(),
                password: "pw".to_string(),
                confirm_password: "pw".to_string(),
                is_seller: true,
                seller_description: "Designer".to_string(),
            },
        )
        .unwrap()
    }

    fn form(title: &str, price: &str) -> ServiceForm {
        ServiceForm {
            title: title.to_string(),
            description: format!("{title} description"),
            price: price.to_string(),
            image: "https://example.com/image.png".to_string(),
        }
    }

    #[test]
    fn test_next_service_id_is_monotonic() {
        assert_eq!(next_service_id(&[], 1000), ServiceId(1000));

        let user = seller(&repo());
        let mut services = user.services;
        services.push(form("a", "1").into_record(ServiceId(1000)).unwrap());
        // Same millisecond: bumped past the existing id
        assert_eq!(next_service_id(&services, 1000), ServiceId(1001));
        // Clock behind the stored ids
        assert_eq!(next_service_id(&services, 5), ServiceId(1001));
        assert_eq!(next_service_id(&services, 2000), ServiceId(2000));
    }

    #[test]
    fn test_create_writes_directory_and_session() {
        let repo = repo();
        let owner = seller(&repo);

        let updated = create_service(&repo, &owner, form("Logo", "35")).unwrap();
        assert_eq!(updated.services.len(), 1);
        assert_eq!(updated.services[0].title, "Logo");
        assert_eq!(updated.services[0].price, 35.0);

        assert_eq!(repo.find_user("sara").unwrap(), Some(updated.clone()));
        assert_eq!(repo.get_session().unwrap(), Some(updated));
    }

    #[test]
    fn test_rapid_creates_get_distinct_ids() {
        let repo = repo();
        let mut owner = seller(&repo);
        for i in 0..5 {
            owner = create_service(&repo, &owner, form(&format!("s{i}"), "10")).unwrap();
        }
        let mut ids: Vec<_> = owner.services.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_edit_preserves_id_and_position() {
        let repo = repo();
        let owner = seller(&repo);
        let owner = create_service(&repo, &owner, form("First", "10")).unwrap();
        let owner = create_service(&repo, &owner, form("Second", "20")).unwrap();
        let target = owner.services[0].clone();

        let mut edit = ServiceForm::from_service(&target);
        assert_eq!(edit.price, "10");
        edit.title = "First, revised".to_string();
        edit.price = "12.5".to_string();

        let updated = update_service(&repo, &owner, target.id, edit).unwrap();
        assert_eq!(updated.services.len(), 2);
        let revised = &updated.services[0];
        assert_eq!(revised.id, target.id);
        assert_eq!(revised.title, "First, revised");
        assert_eq!(revised.price, 12.5);
        assert_eq!(revised.description, target.description);
        assert_eq!(revised.image, target.image);
        assert_eq!(updated.services[1], owner.services[1]);
        assert_eq!(repo.get_session().unwrap(), Some(updated));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let repo = repo();
        let mut owner = seller(&repo);
        for title in ["a", "b", "c"] {
            owner = create_service(&repo, &owner, form(title, "5")).unwrap();
        }
        let doomed = owner.services[1].id;

        let updated = delete_service(&repo, &owner, doomed).unwrap();
        let titles: Vec<_> = updated.services.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);
        assert!(updated.service(doomed).is_none());
        assert_eq!(repo.find_user("sara").unwrap(), Some(updated.clone()));

        let err = delete_service(&repo, &updated, doomed).unwrap_err();
        assert!(matches!(err, MarketError::ServiceNotFound(id) if id == doomed));
    }

    #[test]
    fn test_invalid_price_writes_nothing() {
        let repo = repo();
        let owner = seller(&repo);
        for bad in ["", "abc", "-1", "NaN", "inf"] {
            let err = create_service(&repo, &owner, form("Logo", bad)).unwrap_err();
            assert!(matches!(err, MarketError::InvalidPrice(_)), "{bad}");
        }
        assert!(repo.find_user("sara").unwrap().unwrap().services.is_empty());
    }

    #[test]
    fn test_update_unknown_id() {
        let repo = repo();
        let owner = seller(&repo);
        let err = update_service(&repo, &owner, ServiceId(42), form("x", "1")).unwrap_err();
        assert_eq!(err.to_string(), "Service 42 not found");
    }

    #[test]
    fn test_buyers_cannot_manage_services() {
        let repo = repo();
        let mut buyer = seller(&repo);
        buyer.is_seller = false;
        let err = create_service(&repo, &buyer, form("x", "1")).unwrap_err();
        assert!(matches!(err, MarketError::NotASeller));
    }

    #[test]
    fn test_works_from_stale_snapshot() {
        let repo = repo();
        let stale = seller(&repo);
        // Directory already has a service the snapshot does not know about
        let fresh = create_service(&repo, &stale, form("Existing", "1")).unwrap();

        let updated = create_service(&repo, &stale, form("New", "2")).unwrap();
        assert_eq!(updated.services.len(), 2);
        assert_eq!(updated.services[0], fresh.services[0]);
    }
}
