//! Profile Edit Page
//!
//! Avatar (with local preview before upload) and the editable profile
//! fields. Saving uploads the new avatar first, then patches the user.

use dioxus::prelude::*;
use gupshup_core::{
    ChatError, FieldErrors, ProfileUpdate, RouteGate, StagedImage, User, MAX_AVATAR_BYTES,
};

use crate::components::image_picker::pick_image;
use crate::components::{Avatar, RequireSession, TextField};
use crate::context::{use_client, use_gate, use_toasts};

#[component]
pub fn ProfileEdit() -> Element {
    rsx! {
        RequireSession { ProfileForm {} }
    }
}

#[component]
fn ProfileForm() -> Element {
    let client = use_client();
    let notifier = use_toasts();
    let mut gate = use_gate();
    let navigator = use_navigator();

    let me = client.session_user().unwrap_or_default();
    let mut draft = use_signal(|| ProfileUpdate::from(&me));
    let mut avatar: Signal<Option<StagedImage>> = use_signal(|| None);
    let mut errors = use_signal(FieldErrors::new);
    let mut saving = use_signal(|| false);
    let mut picking = use_signal(|| false);

    let choose_avatar = move |_: MouseEvent| {
        if picking() {
            return;
        }
        picking.set(true);
        spawn(async move {
            match pick_image("Choose Avatar", MAX_AVATAR_BYTES).await {
                Some(Ok(image)) => {
                    errors.write().clear("avatar");
                    avatar.set(Some(image));
                }
                Some(Err(e)) => {
                    let mut errors = errors.write();
                    errors.clear("avatar");
                    errors.add("avatar", e.user_message());
                }
                None => {}
            }
            picking.set(false);
        });
    };

    let save = move |_: MouseEvent| {
        if saving() {
            return;
        }
        let update = draft();
        let image = avatar();
        let client = client.clone();
        saving.set(true);
        spawn(async move {
            match client.update_profile(update, image).await {
                Ok(user) => {
                    notifier.success("Profile updated successfully!");
                    draft.set(ProfileUpdate::from(&user));
                    avatar.set(None);
                    errors.set(FieldErrors::new());
                    gate.set(RouteGate::Authenticated(user));
                }
                Err(ChatError::Validation(fields)) => errors.set(fields),
                Err(e) => {
                    tracing::error!(error = %e, "Profile update failed");
                    notifier.error(e.user_message());
                }
            }
            saving.set(false);
        });
    };

    let preview_user = User {
        photo: avatar
            .read()
            .as_ref()
            .map(StagedImage::preview_uri)
            .unwrap_or_else(|| draft.read().photo.clone()),
        name: draft.read().name.clone(),
        ..me
    };
    let error = move |field: &str| errors.read().get(field).map(str::to_string);
    let bio = draft.read().bio.clone();

    rsx! {
        div { class: "profile-page",
            header { class: "profile-page__header",
                button {
                    class: "btn btn--ghost",
                    onclick: move |_| navigator.go_back(),
                    "← Back"
                }
                h1 { class: "profile-page__title", "Edit profile" }
            }

            div { class: "profile-card",
                div { class: "profile-card__avatar",
                    Avatar { user: preview_user, class: "avatar avatar--large".to_string() }
                    button {
                        class: "btn btn--ghost",
                        disabled: saving() || picking(),
                        onclick: choose_avatar,
                        "Change photo"
                    }
                    if let Some(message) = error("avatar") {
                        span { class: "field__error", "{message}" }
                    }
                }

                TextField {
                    label: "Name".to_string(),
                    value: draft.read().name.clone(),
                    error: error("name"),
                    disabled: saving(),
                    on_input: move |v| {
                        draft.write().name = v;
                        errors.write().clear("name");
                    },
                }
                TextField {
                    label: "Username".to_string(),
                    value: draft.read().username.clone(),
                    disabled: saving(),
                    on_input: move |v| draft.write().username = v,
                }
                label { class: "field",
                    span { class: "field__label", "Bio" }
                    textarea {
                        class: "field__input field__input--area",
                        value: "{bio}",
                        rows: 3,
                        disabled: saving(),
                        oninput: move |e| draft.write().bio = e.value(),
                    }
                }
                TextField {
                    label: "Email".to_string(),
                    value: draft.read().email.clone(),
                    input_type: "email".to_string(),
                    error: error("email"),
                    disabled: saving(),
                    on_input: move |v| {
                        draft.write().email = v;
                        errors.write().clear("email");
                    },
                }
                TextField {
                    label: "Phone".to_string(),
                    value: draft.read().phone.clone(),
                    input_type: "tel".to_string(),
                    disabled: saving(),
                    on_input: move |v| draft.write().phone = v,
                }

                button {
                    class: "btn btn--primary btn--block",
                    disabled: saving(),
                    onclick: save,
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }
        }
    }
}
