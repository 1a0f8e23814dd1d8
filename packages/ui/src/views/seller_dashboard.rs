//! Seller dashboard: the signed-in seller's services.

use dioxus::prelude::*;
use market::dashboard::{create_service, delete_service, update_service, ServiceForm};
use market::session::{seller_access, Access};
use store::{ServiceId, ServiceRecord};

use crate::components::{Button, ButtonVariant, ErrorBanner, Input, Label, Textarea};
use crate::icons::{FaCirclePlus, FaPenToSquare, FaTrash};
use crate::{make_repo, use_config, use_session, Icon};

/// Seller dashboard: list, create, edit and delete the seller's services.
///
/// Visitors without a session are sent to sign-in, buyers are sent home.
#[component]
pub fn SellerDashboardView(
    on_redirect_sign_in: EventHandler<()>,
    on_redirect_home: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let config = use_config();
    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| Option::<ServiceId>::None);
    let mut draft = use_signal(ServiceForm::default);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || match seller_access(session().user.as_ref()) {
        Access::RedirectSignIn => {
            tracing::debug!("dashboard without session, redirecting to sign in");
            on_redirect_sign_in.call(());
        }
        Access::RedirectHome => {
            tracing::debug!("dashboard for a buyer, redirecting home");
            on_redirect_home.call(());
        }
        Access::Granted(_) => {}
    });

    let mut reset_form = move || {
        show_form.set(false);
        editing.set(None);
        draft.set(ServiceForm::default());
        error.set(None);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(owner) = session().user else {
            return;
        };
        let repo = make_repo(&config());
        let result = match editing() {
            Some(id) => update_service(&repo, &owner, id, draft()),
            None => create_service(&repo, &owner, draft()),
        };
        match result {
            Ok(user) => {
                session.write().user = Some(user);
                reset_form();
            }
            Err(e) => {
                super::report_error("save service", &e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let handle_edit = move |service: ServiceRecord| {
        editing.set(Some(service.id));
        draft.set(ServiceForm::from_service(&service));
        error.set(None);
        show_form.set(true);
    };

    let handle_delete = move |id: ServiceId| {
        let Some(owner) = session().user else {
            return;
        };
        let repo = make_repo(&config());
        match delete_service(&repo, &owner, id) {
            Ok(user) => session.write().user = Some(user),
            Err(e) => {
                super::report_error("delete service", &e);
                error.set(Some(e.to_string()));
            }
        }
    };

    let Access::Granted(user) = seller_access(session().user.as_ref()) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "container page",

            div {
                class: "page-header",
                h1 { class: "page-title", "Seller Dashboard" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        reset_form();
                        show_form.set(true);
                    },
                    Icon { icon: FaCirclePlus, width: 18, height: 18 }
                    span { "Add New Service" }
                }
            }

            if let Some(err) = error() {
                ErrorBanner { message: err }
            }

            if show_form() {
                div {
                    class: "panel",
                    h2 {
                        class: "panel-title",
                        if editing().is_some() { "Edit Service" } else { "Create New Service" }
                    }
                    form {
                        class: "form",
                        onsubmit: handle_submit,

                        div {
                            class: "field",
                            Label { html_for: "service-title", "Title" }
                            Input {
                                id: "service-title",
                                required: true,
                                value: draft().title,
                                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                            }
                        }

                        div {
                            class: "field",
                            Label { html_for: "service-description", "Description" }
                            Textarea {
                                id: "service-description",
                                required: true,
                                value: draft().description,
                                oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                            }
                        }

                        div {
                            class: "field",
                            Label { html_for: "service-price", "Price ($)" }
                            Input {
                                id: "service-price",
                                r#type: "number",
                                required: true,
                                min: "0",
                                step: "0.01",
                                value: draft().price,
                                oninput: move |evt: FormEvent| draft.write().price = evt.value(),
                            }
                        }

                        div {
                            class: "field",
                            Label { html_for: "service-image", "Image URL" }
                            Input {
                                id: "service-image",
                                r#type: "url",
                                required: true,
                                value: draft().image,
                                oninput: move |evt: FormEvent| draft.write().image = evt.value(),
                            }
                        }

                        div {
                            class: "form-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| reset_form(),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                r#type: "submit",
                                if editing().is_some() { "Update Service" } else { "Create Service" }
                            }
                        }
                    }
                }
            }

            if user.services.is_empty() {
                div {
                    class: "empty-state",
                    p { "No services yet. Add your first service to start selling." }
                }
            } else {
                div {
                    class: "service-grid",
                    for service in user.services.iter().cloned() {
                        ServiceCard {
                            key: "{service.id}",
                            service: service,
                            on_edit: handle_edit,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceCard(
    service: ServiceRecord,
    on_edit: EventHandler<ServiceRecord>,
    on_delete: EventHandler<ServiceId>,
) -> Element {
    let id = service.id;
    let for_edit = service.clone();

    rsx! {
        div {
            class: "card",
            img { class: "card-image", src: "{service.image}", alt: "{service.title}" }
            div {
                class: "card-body",
                h3 { class: "card-title", "{service.title}" }
                p { class: "muted", "{service.description}" }
                div {
                    class: "card-footer",
                    span { class: "price", "${service.display_price()}" }
                    div {
                        class: "card-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            title: "Edit",
                            onclick: move |_| on_edit.call(for_edit.clone()),
                            Icon { icon: FaPenToSquare, width: 16, height: 16 }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            title: "Delete",
                            onclick: move |_| on_delete.call(id),
                            Icon { icon: FaTrash, width: 16, height: 16 }
                        }
                    }
                }
            }
        }
    }
}
