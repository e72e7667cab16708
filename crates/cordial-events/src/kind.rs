//! Event payload variants, one per leaf tag.

use chrono::{DateTime, Utc};
use cordial_core::snowflake::Snowflake;
use serde::{Deserialize, Serialize};

use crate::payload::channel::{ChannelRef, ThreadMember, ThreadRef};
use crate::payload::custom::CustomEvent;
use crate::payload::entity::{EmojiRef, RoleRef, StageInstanceRef, StickerRef};
use crate::payload::guild::{GuildRef, GuildUser, Invite, MemberRoles, PermissionOverride, VoiceFlag};
use crate::payload::interaction::{
    AutoComplete, CommandInteraction, ComponentInteraction, ContextInteraction, ModalSubmit,
};
use crate::payload::lifecycle::{
    Disconnect, Exception, GatewayPing, HttpRequest, RawGateway, Ready, Reconnected, Resumed,
    Shutdown, StatusChange,
};
use crate::payload::message::{BulkDelete, Message, MessageRef, Reaction};
use crate::payload::user::{Activity, OnlineStatus, Typing};
use crate::tag::EventTag;
use crate::update::{PropertyChange, PropertyUpdate};

macro_rules! event_kinds {
    ($($tag:ident($payload:ty),)*) => {
        /// Event payload, one variant per leaf [`EventTag`].
        ///
        /// Serialized adjacently tagged: `{"t": "<tag name>", "d": <payload>}`,
        /// the shape of a gateway dispatch.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "t", content = "d")]
        pub enum EventKind {
            $(
                #[doc = concat!("Payload of a `", stringify!($tag), "` event.")]
                $tag($payload),
            )*
        }

        impl EventKind {
            /// Returns the most specific tag of this payload.
            #[must_use]
            pub fn tag(&self) -> EventTag {
                match self {
                    $(EventKind::$tag(_) => EventTag::$tag,)*
                }
            }
        }

        /// Every tag a concrete event can carry.
        pub const LEAF_TAGS: &[EventTag] = &[$(EventTag::$tag),*];
    };
}

event_kinds! {
    Ready(Ready),
    Resumed(Resumed),
    Reconnected(Reconnected),
    Disconnect(Disconnect),
    Shutdown(Shutdown),
    StatusChange(StatusChange),
    GatewayPing(GatewayPing),
    Exception(Exception),
    RawGateway(RawGateway),
    HttpRequest(HttpRequest),
    Custom(CustomEvent),

    ChannelCreate(ChannelRef),
    ChannelDelete(ChannelRef),
    ChannelUpdateName(PropertyChange<String>),
    ChannelUpdateTopic(PropertyChange<Option<String>>),
    ChannelUpdateNsfw(PropertyChange<bool>),
    ChannelUpdateBitrate(PropertyChange<u32>),
    ChannelUpdateSlowmode(PropertyChange<u32>),
    ChannelUpdatePosition(PropertyChange<i32>),
    ChannelUpdateParent(PropertyChange<Option<Snowflake>>),
    ChannelUpdateArchived(PropertyChange<bool>),
    ChannelUpdateLocked(PropertyChange<bool>),

    ThreadRevealed(ThreadRef),
    ThreadHidden(ThreadRef),
    ThreadMemberJoin(ThreadMember),
    ThreadMemberLeave(ThreadMember),

    GuildReady(GuildRef),
    GuildJoin(GuildRef),
    GuildLeave(GuildRef),
    GuildAvailable(GuildRef),
    GuildUnavailable(GuildRef),
    GuildBan(GuildUser),
    GuildUnban(GuildUser),
    GuildMemberRemove(GuildUser),
    UnavailableGuildJoined(GuildRef),
    GuildUpdateName(PropertyChange<String>),
    GuildUpdateOwner(PropertyChange<Snowflake>),
    GuildUpdateIcon(PropertyChange<Option<String>>),
    GuildUpdateAfkTimeout(PropertyChange<u32>),
    GuildMemberJoin(GuildUser),
    GuildMemberRoleAdd(MemberRoles),
    GuildMemberRoleRemove(MemberRoles),
    GuildMemberUpdateNickname(PropertyChange<Option<String>>),
    GuildMemberUpdateTimeOut(PropertyChange<Option<DateTime<Utc>>>),
    GuildInviteCreate(Invite),
    GuildInviteDelete(Invite),
    GuildVoiceMute(VoiceFlag),
    GuildVoiceDeafen(VoiceFlag),
    PermissionOverrideCreate(PermissionOverride),
    PermissionOverrideUpdate(PermissionOverride),
    PermissionOverrideDelete(PermissionOverride),

    MessageReceived(Message),
    MessageUpdate(Message),
    MessageDelete(MessageRef),
    MessageReactionRemoveAll(MessageRef),
    MessageReactionAdd(Reaction),
    MessageReactionRemove(Reaction),
    MessageBulkDelete(BulkDelete),

    RoleCreate(RoleRef),
    RoleDelete(RoleRef),
    RoleUpdateName(PropertyChange<String>),
    RoleUpdateColor(PropertyChange<u32>),
    RoleUpdatePosition(PropertyChange<i32>),
    RoleUpdateHoisted(PropertyChange<bool>),

    EmojiAdded(EmojiRef),
    EmojiRemoved(EmojiRef),
    EmojiUpdateName(PropertyChange<String>),

    GuildStickerAdded(StickerRef),
    GuildStickerRemoved(StickerRef),
    GuildStickerUpdateName(PropertyChange<String>),
    GuildStickerUpdateDescription(PropertyChange<String>),

    StageInstanceCreate(StageInstanceRef),
    StageInstanceDelete(StageInstanceRef),
    StageInstanceUpdateTopic(PropertyChange<String>),

    UserTyping(Typing),
    UserUpdateName(PropertyChange<String>),
    UserUpdateAvatar(PropertyChange<Option<String>>),
    UserUpdateOnlineStatus(PropertyChange<OnlineStatus>),
    UserActivityStart(Activity),
    UserActivityEnd(Activity),

    SelfUpdateName(PropertyChange<String>),
    SelfUpdateAvatar(PropertyChange<Option<String>>),
    SelfUpdateMfa(PropertyChange<bool>),

    SlashCommandInteraction(CommandInteraction),
    UserContextInteraction(ContextInteraction),
    MessageContextInteraction(ContextInteraction),
    ButtonInteraction(ComponentInteraction),
    SelectMenuInteraction(ComponentInteraction),
    ModalInteraction(ModalSubmit),
    CommandAutoCompleteInteraction(AutoComplete),
}

impl EventKind {
    /// Returns the old/new view of an update-shaped payload.
    #[must_use]
    pub fn property_update(&self) -> Option<&dyn PropertyUpdate> {
        let change: &dyn PropertyUpdate = match self {
            EventKind::StatusChange(p) => p,
            EventKind::GatewayPing(p) => p,
            EventKind::ChannelUpdateName(p)
            | EventKind::GuildUpdateName(p)
            | EventKind::RoleUpdateName(p)
            | EventKind::EmojiUpdateName(p)
            | EventKind::GuildStickerUpdateName(p)
            | EventKind::GuildStickerUpdateDescription(p)
            | EventKind::StageInstanceUpdateTopic(p)
            | EventKind::UserUpdateName(p)
            | EventKind::SelfUpdateName(p) => p,
            EventKind::ChannelUpdateTopic(p)
            | EventKind::GuildUpdateIcon(p)
            | EventKind::GuildMemberUpdateNickname(p)
            | EventKind::UserUpdateAvatar(p)
            | EventKind::SelfUpdateAvatar(p) => p,
            EventKind::ChannelUpdateNsfw(p)
            | EventKind::ChannelUpdateArchived(p)
            | EventKind::ChannelUpdateLocked(p)
            | EventKind::RoleUpdateHoisted(p)
            | EventKind::SelfUpdateMfa(p) => p,
            EventKind::ChannelUpdateBitrate(p)
            | EventKind::ChannelUpdateSlowmode(p)
            | EventKind::GuildUpdateAfkTimeout(p)
            | EventKind::RoleUpdateColor(p) => p,
            EventKind::ChannelUpdatePosition(p) | EventKind::RoleUpdatePosition(p) => p,
            EventKind::ChannelUpdateParent(p) => p,
            EventKind::GuildUpdateOwner(p) => p,
            EventKind::GuildMemberUpdateTimeOut(p) => p,
            EventKind::UserUpdateOnlineStatus(p) => p,
            _ => return None,
        };
        Some(change)
    }
}
