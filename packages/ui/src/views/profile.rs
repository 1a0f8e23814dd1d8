//! Profile page: account details, editing, and reviews.

use dioxus::prelude::*;
use market::profile::{reviews_for, update_profile, ProfileForm, UserReview};
use market::session::{member_access, Access};
use store::{KeyValueStore, Repository};

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, Textarea};
use crate::{make_repo, use_config, use_session, StarRating};

/// Reviews involving `username`, or the message to show when they cannot be read.
fn load_reviews<S: KeyValueStore>(
    repo: &Repository<S>,
    username: &str,
) -> Result<Vec<UserReview>, String> {
    reviews_for(repo, username).map_err(|e| {
        super::report_error("load reviews", &e);
        e.to_string()
    })
}

/// Profile of the signed-in user. Visitors without a session are sent to
/// sign-in.
#[component]
pub fn ProfileView(on_redirect_sign_in: EventHandler<()>) -> Element {
    let mut session = use_session();
    let config = use_config();
    let mut is_editing = use_signal(|| false);
    let mut draft = use_signal(ProfileForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        if let Access::RedirectSignIn = member_access(session().user.as_ref()) {
            tracing::debug!("profile without session, redirecting to sign in");
            on_redirect_sign_in.call(());
        }
    });

    let reviews = use_memo(move || match session().user {
        Some(user) => load_reviews(&make_repo(&config()), &user.username),
        None => Ok(Vec::new()),
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(user) = session().user else {
            return;
        };
        let repo = make_repo(&config());
        match update_profile(&repo, &user, draft()) {
            Ok(updated) => {
                session.write().user = Some(updated);
                error.set(None);
                is_editing.set(false);
            }
            Err(e) => {
                super::report_error("update profile", &e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let Access::Granted(user) = member_access(session().user.as_ref()) else {
        return rsx! {};
    };
    let for_edit = user.clone();

    rsx! {
        div {
            class: "container page profile",
            div {
                class: "panel",
                div {
                    class: "page-header",
                    h1 { class: "page-title", "Profile" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            if !is_editing() {
                                draft.set(ProfileForm::from_user(&for_edit));
                            }
                            error.set(None);
                            is_editing.toggle();
                        },
                        if is_editing() { "Cancel" } else { "Edit Profile" }
                    }
                }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                if is_editing() {
                    form {
                        class: "form",
                        onsubmit: handle_submit,

                        div {
                            class: "field",
                            Label { html_for: "profile-username", "Username" }
                            Input {
                                id: "profile-username",
                                value: user.username.clone(),
                                disabled: true,
                            }
                        }

                        div {
                            class: "field",
                            Label { html_for: "profile-email", "Email" }
                            Input {
                                id: "profile-email",
                                r#type: "email",
                                required: true,
                                value: draft().email,
                                oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                            }
                        }

                        if user.is_seller {
                            div {
                                class: "field",
                                Label { html_for: "profile-description", "Professional Description" }
                                Textarea {
                                    id: "profile-description",
                                    value: draft().seller_description,
                                    oninput: move |evt: FormEvent| draft.write().seller_description = evt.value(),
                                }
                            }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            "Save Changes"
                        }
                    }
                } else {
                    dl {
                        class: "profile-fields",
                        dt { "Username" }
                        dd { "{user.username}" }
                        dt { "Email" }
                        dd { "{user.email}" }
                        dt { "Account Type" }
                        dd { "{user.account_type()}" }
                        if user.is_seller {
                            dt { "Professional Description" }
                            dd { "{user.seller_description}" }
                        }
                    }
                }
            }

            {match reviews() {
                Err(message) => rsx! {
                    div {
                        class: "panel",
                        h2 { class: "panel-title", "Reviews" }
                        ErrorBanner { message }
                    }
                },
                Ok(entries) if !entries.is_empty() => rsx! {
                    div {
                        class: "panel",
                        h2 { class: "panel-title", "Reviews" }
                        for entry in entries {
                            ReviewItem { key: "{entry.review.id}", entry: entry }
                        }
                    }
                },
                Ok(_) => rsx! {},
            }}
        }
    }
}

#[component]
fn ReviewItem(entry: UserReview) -> Element {
    let review = &entry.review;

    rsx! {
        div {
            class: "review",
            div {
                class: "review-header",
                StarRating { rating: review.rating }
                span { class: "muted small", "{review.display_date()}" }
            }
            p { "{review.comment}" }
            p { class: "muted small", "{entry.relation.label()}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_load_reviews_reports_malformed_blob() {
        let store = MemoryStore::new();
        store
            .set(
                "reviews",
                r#"[{"id": 1, "sellerId": "sara", "buyerId": "bob", "rating": 9, "comment": "", "date": ""}]"#,
            )
            .unwrap();
        let repo = Repository::new(store);

        let message = load_reviews(&repo, "sara").unwrap_err();
        assert!(message.contains("reviews"), "{message}");
        assert!(message.contains("malformed"), "{message}");
    }

    #[test]
    fn test_load_reviews_ok() {
        let store = MemoryStore::new();
        store
            .set(
                "reviews",
                r#"[{"id": 1, "sellerId": "sara", "buyerId": "bob", "rating": 5, "comment": "Great", "date": "2024-01-10"}]"#,
            )
            .unwrap();
        let repo = Repository::new(store);

        let reviews = load_reviews(&repo, "sara").unwrap();
        assert_eq!(reviews.len(), 1);
        assert!(load_reviews(&repo, "nobody").unwrap().is_empty());
        assert!(load_reviews(&Repository::new(MemoryStore::new()), "sara")
            .unwrap()
            .is_empty());
    }
}
