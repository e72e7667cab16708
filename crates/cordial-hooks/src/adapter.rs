//! The listener adapter trait and its static handler table.
//!
//! Both are generated from one list so that every hook has exactly one table
//! entry. An entry's `name` follows the naming convention used by
//! [`handler_name`](crate::resolver::handler_name): `"on"` followed by the
//! tag name, e.g. `"onChannelUpdateName"`.

use std::fmt;

use chrono::{DateTime, Utc};
use cordial_core::error::HandlerResult;
use cordial_core::snowflake::Snowflake;
use cordial_events::payload::channel::{ChannelRef, ThreadMember, ThreadRef};
use cordial_events::payload::entity::{EmojiRef, RoleRef, StageInstanceRef, StickerRef};
use cordial_events::payload::guild::{
    GuildRef, GuildUser, Invite, MemberRoles, PermissionOverride, VoiceFlag,
};
use cordial_events::payload::interaction::{
    AutoComplete, CommandInteraction, ComponentInteraction, ContextInteraction, ModalSubmit,
};
use cordial_events::payload::lifecycle::{
    Disconnect, Exception, GatewayPing, HttpRequest, RawGateway, Ready, Reconnected, Resumed,
    Shutdown, StatusChange,
};
use cordial_events::payload::message::{BulkDelete, Message, MessageRef, Reaction};
use cordial_events::payload::user::{Activity, OnlineStatus, Typing};
use cordial_events::{Event, EventKind, EventTag, PropertyChange, UpdateEvent};

use crate::error::InvocationError;

/// Calls one hook of a listener for an event.
pub type InvokeFn = fn(&dyn ListenerAdapter, &Event) -> Result<(), InvocationError>;

/// One entry of the handler table.
#[derive(Clone, Copy)]
pub struct HandlerEntry {
    /// Convention name of the hook, e.g. `"onGuildMemberJoin"`.
    pub name: &'static str,
    /// The only tag this entry accepts.
    pub accepts: EventTag,
    /// Calls the hook.
    pub invoke: InvokeFn,
}

impl HandlerEntry {
    /// Invokes the hook on `listener`.
    ///
    /// # Errors
    ///
    /// Returns the hook's error, or `PayloadMismatch` if `event` does not
    /// belong to [`HandlerEntry::accepts`].
    pub fn invoke(&self, listener: &dyn ListenerAdapter, event: &Event) -> Result<(), InvocationError> {
        (self.invoke)(listener, event)
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("name", &self.name)
            .field("accepts", &self.accepts)
            .finish_non_exhaustive()
    }
}

impl PartialEq for HandlerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.accepts == other.accepts
    }
}

impl Eq for HandlerEntry {}

macro_rules! listener_adapter {
    (
        leaves {
            $($leaf:ident => $leaf_hook:ident($payload:ty);)*
        }
        groups {
            $($group:ident => $group_hook:ident;)*
        }
    ) => {
        /// Receives gateway events. Every hook defaults to doing nothing.
        ///
        /// For each event the dispatcher calls [`on_generic_event`], then
        /// [`on_generic_update`] if the event is update-shaped, then the hook
        /// of every tag in the event's lineage that has one, most specific
        /// first. The first hook that returns an error stops the dispatch.
        ///
        /// Leaf hooks receive the payload; group hooks receive only the event.
        ///
        /// [`on_generic_event`]: ListenerAdapter::on_generic_event
        /// [`on_generic_update`]: ListenerAdapter::on_generic_update
        pub trait ListenerAdapter: Send + Sync {
            /// Called first, for every event.
            fn on_generic_event(&self, event: &Event) -> HandlerResult {
                let _ = event;
                Ok(())
            }

            /// Called second, for every update-shaped event.
            fn on_generic_update(&self, update: &UpdateEvent<'_>) -> HandlerResult {
                let _ = update;
                Ok(())
            }

            $(
                #[doc = concat!("Called for every `", stringify!($leaf), "` event.")]
                fn $leaf_hook(&self, event: &Event, payload: &$payload) -> HandlerResult {
                    let _ = (event, payload);
                    Ok(())
                }
            )*

            $(
                #[doc = concat!("Called for every event under `", stringify!($group), "`.")]
                fn $group_hook(&self, event: &Event) -> HandlerResult {
                    let _ = event;
                    Ok(())
                }
            )*
        }

        /// Every hook of [`ListenerAdapter`] except the two generic ones.
        pub static HANDLER_TABLE: &[HandlerEntry] = &[
            $(
                HandlerEntry {
                    name: concat!("on", stringify!($leaf)),
                    accepts: EventTag::$leaf,
                    invoke: |listener, event| match &event.kind {
                        EventKind::$leaf(payload) => listener
                            .$leaf_hook(event, payload)
                            .map_err(InvocationError::Handler),
                        other => Err(InvocationError::PayloadMismatch {
                            expected: EventTag::$leaf,
                            found: other.tag(),
                        }),
                    },
                },
            )*
            $(
                HandlerEntry {
                    name: concat!("on", stringify!($group)),
                    accepts: EventTag::$group,
                    invoke: |listener, event| {
                        if event.is_a(EventTag::$group) {
                            listener.$group_hook(event).map_err(InvocationError::Handler)
                        } else {
                            Err(InvocationError::PayloadMismatch {
                                expected: EventTag::$group,
                                found: event.tag(),
                            })
                        }
                    },
                },
            )*
        ];
    };
}

listener_adapter! {
    leaves {
        Ready => on_ready(Ready);
        Resumed => on_resumed(Resumed);
        Reconnected => on_reconnected(Reconnected);
        Disconnect => on_disconnect(Disconnect);
        Shutdown => on_shutdown(Shutdown);
        StatusChange => on_status_change(StatusChange);
        GatewayPing => on_gateway_ping(GatewayPing);
        Exception => on_exception(Exception);
        RawGateway => on_raw_gateway(RawGateway);
        HttpRequest => on_http_request(HttpRequest);

        ChannelCreate => on_channel_create(ChannelRef);
        ChannelDelete => on_channel_delete(ChannelRef);
        ChannelUpdateName => on_channel_update_name(PropertyChange<String>);
        ChannelUpdateTopic => on_channel_update_topic(PropertyChange<Option<String>>);
        ChannelUpdateNsfw => on_channel_update_nsfw(PropertyChange<bool>);
        ChannelUpdateBitrate => on_channel_update_bitrate(PropertyChange<u32>);
        ChannelUpdateSlowmode => on_channel_update_slowmode(PropertyChange<u32>);
        ChannelUpdatePosition => on_channel_update_position(PropertyChange<i32>);
        ChannelUpdateParent => on_channel_update_parent(PropertyChange<Option<Snowflake>>);
        ChannelUpdateArchived => on_channel_update_archived(PropertyChange<bool>);
        ChannelUpdateLocked => on_channel_update_locked(PropertyChange<bool>);

        ThreadRevealed => on_thread_revealed(ThreadRef);
        ThreadHidden => on_thread_hidden(ThreadRef);
        ThreadMemberJoin => on_thread_member_join(ThreadMember);
        ThreadMemberLeave => on_thread_member_leave(ThreadMember);

        GuildReady => on_guild_ready(GuildRef);
        GuildJoin => on_guild_join(GuildRef);
        GuildLeave => on_guild_leave(GuildRef);
        GuildAvailable => on_guild_available(GuildRef);
        GuildUnavailable => on_guild_unavailable(GuildRef);
        GuildBan => on_guild_ban(GuildUser);
        GuildUnban => on_guild_unban(GuildUser);
        GuildMemberRemove => on_guild_member_remove(GuildUser);
        UnavailableGuildJoined => on_unavailable_guild_joined(GuildRef);
        GuildUpdateName => on_guild_update_name(PropertyChange<String>);
        GuildUpdateOwner => on_guild_update_owner(PropertyChange<Snowflake>);
        GuildUpdateIcon => on_guild_update_icon(PropertyChange<Option<String>>);
        GuildUpdateAfkTimeout => on_guild_update_afk_timeout(PropertyChange<u32>);
        GuildMemberJoin => on_guild_member_join(GuildUser);
        GuildMemberRoleAdd => on_guild_member_role_add(MemberRoles);
        GuildMemberRoleRemove => on_guild_member_role_remove(MemberRoles);
        GuildMemberUpdateNickname => on_guild_member_update_nickname(PropertyChange<Option<String>>);
        GuildMemberUpdateTimeOut => on_guild_member_update_time_out(PropertyChange<Option<DateTime<Utc>>>);
        GuildInviteCreate => on_guild_invite_create(Invite);
        GuildInviteDelete => on_guild_invite_delete(Invite);
        GuildVoiceMute => on_guild_voice_mute(VoiceFlag);
        GuildVoiceDeafen => on_guild_voice_deafen(VoiceFlag);
        PermissionOverrideCreate => on_permission_override_create(PermissionOverride);
        PermissionOverrideUpdate => on_permission_override_update(PermissionOverride);
        PermissionOverrideDelete => on_permission_override_delete(PermissionOverride);

        MessageReceived => on_message_received(Message);
        MessageUpdate => on_message_update(Message);
        MessageDelete => on_message_delete(MessageRef);
        MessageReactionRemoveAll => on_message_reaction_remove_all(MessageRef);
        MessageReactionAdd => on_message_reaction_add(Reaction);
        MessageReactionRemove => on_message_reaction_remove(Reaction);
        MessageBulkDelete => on_message_bulk_delete(BulkDelete);

        RoleCreate => on_role_create(RoleRef);
        RoleDelete => on_role_delete(RoleRef);
        RoleUpdateName => on_role_update_name(PropertyChange<String>);
        RoleUpdateColor => on_role_update_color(PropertyChange<u32>);
        RoleUpdatePosition => on_role_update_position(PropertyChange<i32>);
        RoleUpdateHoisted => on_role_update_hoisted(PropertyChange<bool>);

        EmojiAdded => on_emoji_added(EmojiRef);
        EmojiRemoved => on_emoji_removed(EmojiRef);
        EmojiUpdateName => on_emoji_update_name(PropertyChange<String>);

        GuildStickerAdded => on_guild_sticker_added(StickerRef);
        GuildStickerRemoved => on_guild_sticker_removed(StickerRef);
        GuildStickerUpdateName => on_guild_sticker_update_name(PropertyChange<String>);
        GuildStickerUpdateDescription => on_guild_sticker_update_description(PropertyChange<String>);

        StageInstanceCreate => on_stage_instance_create(StageInstanceRef);
        StageInstanceDelete => on_stage_instance_delete(StageInstanceRef);
        StageInstanceUpdateTopic => on_stage_instance_update_topic(PropertyChange<String>);

        UserTyping => on_user_typing(Typing);
        UserUpdateName => on_user_update_name(PropertyChange<String>);
        UserUpdateAvatar => on_user_update_avatar(PropertyChange<Option<String>>);
        UserUpdateOnlineStatus => on_user_update_online_status(PropertyChange<OnlineStatus>);
        UserActivityStart => on_user_activity_start(Activity);
        UserActivityEnd => on_user_activity_end(Activity);

        SelfUpdateName => on_self_update_name(PropertyChange<String>);
        SelfUpdateAvatar => on_self_update_avatar(PropertyChange<Option<String>>);
        SelfUpdateMfa => on_self_update_mfa(PropertyChange<bool>);

        SlashCommandInteraction => on_slash_command_interaction(CommandInteraction);
        UserContextInteraction => on_user_context_interaction(ContextInteraction);
        MessageContextInteraction => on_message_context_interaction(ContextInteraction);
        ButtonInteraction => on_button_interaction(ComponentInteraction);
        SelectMenuInteraction => on_select_menu_interaction(ComponentInteraction);
        ModalInteraction => on_modal_interaction(ModalSubmit);
        CommandAutoCompleteInteraction => on_command_auto_complete_interaction(AutoComplete);
    }
    groups {
        GenericChannel => on_generic_channel;
        GenericChannelUpdate => on_generic_channel_update;
        GenericThread => on_generic_thread;
        GenericThreadMember => on_generic_thread_member;
        GenericGuild => on_generic_guild;
        GenericGuildUpdate => on_generic_guild_update;
        GenericGuildMember => on_generic_guild_member;
        GenericGuildMemberUpdate => on_generic_guild_member_update;
        GenericGuildInvite => on_generic_guild_invite;
        GenericGuildVoice => on_generic_guild_voice;
        GenericPermissionOverride => on_generic_permission_override;
        GenericMessage => on_generic_message;
        GenericMessageReaction => on_generic_message_reaction;
        GenericRole => on_generic_role;
        GenericRoleUpdate => on_generic_role_update;
        GenericEmoji => on_generic_emoji;
        GenericEmojiUpdate => on_generic_emoji_update;
        GenericGuildSticker => on_generic_guild_sticker;
        GenericGuildStickerUpdate => on_generic_guild_sticker_update;
        GenericStageInstance => on_generic_stage_instance;
        GenericStageInstanceUpdate => on_generic_stage_instance_update;
        GenericUser => on_generic_user;
        GenericUserPresence => on_generic_user_presence;
        GenericSelfUpdate => on_generic_self_update;
        GenericInteractionCreate => on_generic_interaction_create;
        GenericCommandInteraction => on_generic_command_interaction;
        GenericContextInteraction => on_generic_context_interaction;
        GenericComponentInteractionCreate => on_generic_component_interaction_create;
        GenericAutoCompleteInteraction => on_generic_auto_complete_interaction;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cordial_core::session::{SessionContext, ShardInfo};
    use cordial_events::LEAF_TAGS;
    use cordial_events::payload::guild::GuildUser;

    use super::*;

    struct Silent;

    impl ListenerAdapter for Silent {}

    fn guild_ban() -> Event {
        Event::new(
            Arc::new(SessionContext::new(ShardInfo::SINGLE)),
            1,
            Utc::now(),
            EventKind::GuildBan(GuildUser {
                guild_id: Snowflake(1),
                user_id: Snowflake(2),
            }),
        )
    }

    fn entry(tag: EventTag) -> &'static HandlerEntry {
        HANDLER_TABLE
            .iter()
            .find(|entry| entry.accepts == tag)
            .unwrap()
    }

    #[test]
    fn test_table_has_one_entry_per_hooked_tag() {
        for (i, entry) in HANDLER_TABLE.iter().enumerate() {
            assert!(
                HANDLER_TABLE[i + 1..].iter().all(|other| other.accepts != entry.accepts),
                "{} listed twice",
                entry.accepts
            );
            assert!(!entry.accepts.is_structural());
        }
    }

    #[test]
    fn test_every_leaf_but_custom_has_an_entry() {
        for &tag in LEAF_TAGS {
            let has_entry = HANDLER_TABLE.iter().any(|entry| entry.accepts == tag);
            assert_eq!(has_entry, tag != EventTag::Custom, "{tag}");
        }
    }

    #[test]
    fn test_entry_names_prefix_the_tag_name() {
        assert_eq!(entry(EventTag::ChannelUpdateName).name, "onChannelUpdateName");
        assert_eq!(entry(EventTag::GenericGuildMember).name, "onGenericGuildMember");
        assert!(
            HANDLER_TABLE
                .iter()
                .all(|entry| entry.name == format!("on{}", entry.accepts.name()))
        );
    }

    #[test]
    fn test_matching_entries_invoke_the_default_hook() {
        // Arrange
        let event = guild_ban();

        // Act
        let leaf = entry(EventTag::GuildBan).invoke(&Silent, &event);
        let group = entry(EventTag::GenericGuild).invoke(&Silent, &event);

        // Assert
        assert!(leaf.is_ok());
        assert!(group.is_ok());
    }

    #[test]
    fn test_leaf_entry_rejects_another_leaf() {
        let event = guild_ban();

        let result = entry(EventTag::GuildUnban).invoke(&Silent, &event);

        assert!(matches!(
            result,
            Err(InvocationError::PayloadMismatch {
                expected: EventTag::GuildUnban,
                found: EventTag::GuildBan,
            })
        ));
    }

    #[test]
    fn test_group_entry_rejects_events_outside_the_group() {
        let event = guild_ban();

        let result = entry(EventTag::GenericMessage).invoke(&Silent, &event);

        assert!(matches!(
            result,
            Err(InvocationError::PayloadMismatch {
                expected: EventTag::GenericMessage,
                found: EventTag::GuildBan,
            })
        ));
    }
}
