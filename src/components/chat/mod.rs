//! Chat screen components.

mod chat_not_found;
mod conversation_view;
mod image_message;
mod message_bubble;
mod message_input;
mod status_icon;
mod user_list;

pub use chat_not_found::ChatNotFound;
pub use conversation_view::ConversationView;
pub use user_list::UserList;
