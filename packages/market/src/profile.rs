//! Profile editing and the signed-in user's reviews.

use store::{KeyValueStore, Repository, ReviewRecord, UserRecord};

use crate::error::MarketError;
use crate::session::commit_user;

/// Editable profile fields. The username is not editable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub email: String,
    pub seller_description: String,
}

impl ProfileForm {
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            email: user.email.clone(),
            seller_description: user.seller_description.clone(),
        }
    }
}

/// Save profile changes for `user` and return the updated record.
pub fn update_profile<S: KeyValueStore>(
    repo: &Repository<S>,
    user: &UserRecord,
    form: ProfileForm,
) -> Result<UserRecord, MarketError> {
    let mut updated = repo
        .find_user(&user.username)?
        .unwrap_or_else(|| user.clone());
    updated.email = form.email;
    updated.seller_description = form.seller_description;
    commit_user(repo, &updated)?;
    tracing::info!(username = %updated.username, "profile updated");
    Ok(updated)
}

/// How a review relates to the user viewing it.
#[derive(Clone, Debug, PartialEq)]
pub enum ReviewRelation {
    /// The user is the seller; the review came from this buyer.
    From(String),
    /// The user is the buyer; the review was written about this seller.
    To(String),
}

impl ReviewRelation {
    pub fn label(&self) -> String {
        match self {
            ReviewRelation::From(buyer) => format!("From {buyer}"),
            ReviewRelation::To(seller) => format!("To {seller}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UserReview {
    pub review: ReviewRecord,
    pub relation: ReviewRelation,
}

/// Reviews where `username` is the seller or the buyer, in storage order.
pub fn reviews_for<S: KeyValueStore>(
    repo: &Repository<S>,
    username: &str,
) -> Result<Vec<UserReview>, MarketError> {
    Ok(repo
        .list_reviews()?
        .into_iter()
        .filter(|r| r.seller_id == username || r.buyer_id == username)
        .map(|review| {
            let relation = if review.seller_id == username {
                ReviewRelation::From(review.buyer_id.clone())
            } else {
                ReviewRelation::To(review.seller_id.clone())
            };
            UserReview { review, relation }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::{sign_up, SignUpForm};
    use store::MemoryStore;

    const REVIEWS: &str = r#"[
        {"id": 1, "sellerId": "sara", "buyerId": "bob", "rating": 5, "comment": "Great logo", "date": "2024-01-10"},
        {"id": 2, "sellerId": "mike", "buyerId": "carol", "rating": 3, "comment": "Fine", "date": "2024-02-01"},
        {"id": 3, "sellerId": "mike", "buyerId": "sara", "rating": 4, "comment": "Quick", "date": "2024-03-15"},
        {"id": 4, "sellerId": "sara", "buyerId": "dave", "rating": 2, "comment": "Late", "date": "2024-04-20"}
    ]"#;

    fn signed_up(repo: &Repository<MemoryStore>, is_seller: bool) -> UserRecord {
        sign_up(
            repo,
            SignUpForm {
                username: "sara".to_string(),
                email: "sara@example.com".to_string(),
                password: "pw".to_string(),
                confirm_password: "pw".to_string(),
                is_seller,
                seller_description: "Designer".to_string(),
            },
        )
        .unwrap()
    }

    #[test]
    fn test_update_profile_dual_write() {
        let repo = Repository::new(MemoryStore::new());
        let user = signed_up(&repo, true);

        let updated = update_profile(
            &repo,
            &user,
            ProfileForm {
                email: "sara@new.example".to_string(),
                seller_description: "Brand designer".to_string(),
            },
        )
        .unwrap();

        assert_eq!(updated.username, "sara");
        assert_eq!(updated.email, "sara@new.example");
        assert_eq!(updated.seller_description, "Brand designer");
        assert_eq!(updated.password, user.password);
        assert_eq!(repo.find_user("sara").unwrap(), Some(updated.clone()));
        assert_eq!(repo.get_session().unwrap(), Some(updated));
        assert_eq!(repo.list_users().unwrap().len(), 1);
    }

    #[test]
    fn test_profile_form_prefill() {
        let repo = Repository::new(MemoryStore::new());
        let user = signed_up(&repo, false);
        let form = ProfileForm::from_user(&user);
        assert_eq!(form.email, "sara@example.com");
        assert_eq!(form.seller_description, "Designer");
    }

    #[test]
    fn test_reviews_filtered_by_relation_in_storage_order() {
        let store = MemoryStore::new();
        store.set("reviews", REVIEWS).unwrap();
        let repo = Repository::new(store);

        let reviews = reviews_for(&repo, "sara").unwrap();
        let ids: Vec<_> = reviews.iter().map(|r| r.review.id).collect();
        assert_eq!(ids, [1, 3, 4]);
        assert_eq!(reviews[0].relation.label(), "From bob");
        assert_eq!(reviews[1].relation.label(), "To mike");
        assert_eq!(reviews[2].relation, ReviewRelation::From("dave".to_string()));

        assert!(reviews_for(&repo, "nobody").unwrap().is_empty());
    }

    #[test]
    fn test_no_reviews_key() {
        let repo = Repository::new(MemoryStore::new());
        assert!(reviews_for(&repo, "sara").unwrap().is_empty());
    }
}
