//! Cordial Hooks: listener adapter and event dispatch.
//!
//! Application code implements [`ListenerAdapter`] and overrides the hooks it
//! cares about. The [`EventDispatcher`] calls the generic event hook, the
//! generic update hook for update-shaped events, and then the hook of every
//! tag in the event's lineage, most specific first.
//!
//! ```ignore
//! struct Greeter;
//!
//! impl ListenerAdapter for Greeter {
//!     fn on_guild_member_join(&self, _event: &Event, member: &GuildUser) -> HandlerResult {
//!         tracing::info!(user = %member.user_id, "welcome");
//!         Ok(())
//!     }
//! }
//! ```

pub mod adapter;
pub mod dispatcher;
pub mod error;
pub mod listener;
pub mod manager;
pub mod resolver;

pub use adapter::{HANDLER_TABLE, HandlerEntry, InvokeFn, ListenerAdapter};
pub use dispatcher::{EventDispatcher, Resolution};
pub use error::{DispatchError, InvocationError};
pub use listener::{EventListener, TagListener};
pub use manager::{EventManager, HandleReport};
pub use resolver::{ConventionResolver, HandlerResolver, handler_name};
