//! Event variant tags and the static ancestor table.
//!
//! The taxonomy is closed: every tag and its lineage are listed once, below.
//! A lineage starts with the tag itself and walks to the root, most specific
//! first. It is a total order rather than a tree path, so a tag may sit under
//! two sibling groups (see [`EventTag::UserUpdateOnlineStatus`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when parsing a tag name that is not part of the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event tag: {0}")]
pub struct UnknownEventTag(pub String);

macro_rules! descriptor_of {
    ($tag:ident) => {
        concat!(stringify!($tag), "Event")
    };
    ($tag:ident, $descriptor:literal) => {
        $descriptor
    };
}

macro_rules! event_tags {
    (
        $(
            $(#[$doc:meta])*
            $tag:ident $(($descriptor:literal))? => [$($ancestor:ident),*];
        )*
    ) => {
        /// Classification of an event: either a concrete variant or one of
        /// the broader groups it belongs to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum EventTag {
            $(
                $(#[$doc])*
                $tag,
            )*
        }

        impl EventTag {
            /// Every tag in the taxonomy, in declaration order.
            pub const ALL: &'static [EventTag] = &[$(EventTag::$tag),*];

            /// Returns the tag name, e.g. `"ChannelUpdateName"`.
            #[must_use]
            pub fn name(self) -> &'static str {
                match self {
                    $(EventTag::$tag => stringify!($tag),)*
                }
            }

            /// Returns the type descriptor, e.g. `"ChannelUpdateNameEvent"`.
            #[must_use]
            pub fn descriptor(self) -> &'static str {
                match self {
                    $(EventTag::$tag => descriptor_of!($tag $(, $descriptor)?),)*
                }
            }

            /// Returns this tag followed by its ancestors, most specific
            /// first, ending at [`EventTag::GenericEvent`].
            #[must_use]
            pub fn lineage(self) -> &'static [EventTag] {
                match self {
                    $(EventTag::$tag => &[EventTag::$tag $(, EventTag::$ancestor)*],)*
                }
            }
        }

        impl FromStr for EventTag {
            type Err = UnknownEventTag;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($tag) => Ok(EventTag::$tag),)*
                    other => Err(UnknownEventTag(other.to_owned())),
                }
            }
        }
    };
}

event_tags! {
    /// Root of the taxonomy. Every event belongs to it.
    GenericEvent ("GenericEvent") => [];
    /// Base of every concrete event.
    Event ("Event") => [GenericEvent];
    /// Marks update-shaped events (a property changed from old to new).
    Update ("UpdateEvent") => [GenericEvent];

    // Session lifecycle
    Ready => [Event, GenericEvent];
    Resumed => [Event, GenericEvent];
    Reconnected => [Event, GenericEvent];
    Disconnect => [Event, GenericEvent];
    Shutdown => [Event, GenericEvent];
    StatusChange => [Update, Event, GenericEvent];
    GatewayPing => [Update, Event, GenericEvent];
    Exception => [Event, GenericEvent];
    RawGateway => [Event, GenericEvent];
    HttpRequest => [Event, GenericEvent];
    /// Application-defined event. No dedicated hook exists for it.
    Custom => [Event, GenericEvent];

    // Channels
    GenericChannel => [Event, GenericEvent];
    ChannelCreate => [GenericChannel, Event, GenericEvent];
    ChannelDelete => [GenericChannel, Event, GenericEvent];
    GenericChannelUpdate => [GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateName => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateTopic => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateNsfw => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateBitrate => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateSlowmode => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdatePosition => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateParent => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateArchived => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];
    ChannelUpdateLocked => [GenericChannelUpdate, GenericChannel, Update, Event, GenericEvent];

    // Threads
    GenericThread => [Event, GenericEvent];
    ThreadRevealed => [GenericThread, Event, GenericEvent];
    ThreadHidden => [GenericThread, Event, GenericEvent];
    GenericThreadMember => [GenericThread, Event, GenericEvent];
    ThreadMemberJoin => [GenericThreadMember, GenericThread, Event, GenericEvent];
    ThreadMemberLeave => [GenericThreadMember, GenericThread, Event, GenericEvent];

    // Guilds
    GenericGuild => [Event, GenericEvent];
    GuildReady => [GenericGuild, Event, GenericEvent];
    GuildJoin => [GenericGuild, Event, GenericEvent];
    GuildLeave => [GenericGuild, Event, GenericEvent];
    GuildAvailable => [GenericGuild, Event, GenericEvent];
    GuildUnavailable => [GenericGuild, Event, GenericEvent];
    GuildBan => [GenericGuild, Event, GenericEvent];
    GuildUnban => [GenericGuild, Event, GenericEvent];
    GuildMemberRemove => [GenericGuild, Event, GenericEvent];
    /// A guild that was unavailable at login joined; it is not a guild event
    /// because the guild was never loaded.
    UnavailableGuildJoined => [Event, GenericEvent];
    GenericGuildUpdate => [GenericGuild, Update, Event, GenericEvent];
    GuildUpdateName => [GenericGuildUpdate, GenericGuild, Update, Event, GenericEvent];
    GuildUpdateOwner => [GenericGuildUpdate, GenericGuild, Update, Event, GenericEvent];
    GuildUpdateIcon => [GenericGuildUpdate, GenericGuild, Update, Event, GenericEvent];
    GuildUpdateAfkTimeout => [GenericGuildUpdate, GenericGuild, Update, Event, GenericEvent];
    GenericGuildMember => [GenericGuild, Event, GenericEvent];
    GuildMemberJoin => [GenericGuildMember, GenericGuild, Event, GenericEvent];
    GuildMemberRoleAdd => [GenericGuildMember, GenericGuild, Event, GenericEvent];
    GuildMemberRoleRemove => [GenericGuildMember, GenericGuild, Event, GenericEvent];
    GenericGuildMemberUpdate => [GenericGuildMember, GenericGuild, Update, Event, GenericEvent];
    GuildMemberUpdateNickname => [GenericGuildMemberUpdate, GenericGuildMember, GenericGuild, Update, Event, GenericEvent];
    GuildMemberUpdateTimeOut => [GenericGuildMemberUpdate, GenericGuildMember, GenericGuild, Update, Event, GenericEvent];
    GenericGuildInvite => [GenericGuild, Event, GenericEvent];
    GuildInviteCreate => [GenericGuildInvite, GenericGuild, Event, GenericEvent];
    GuildInviteDelete => [GenericGuildInvite, GenericGuild, Event, GenericEvent];
    GenericGuildVoice => [GenericGuild, Event, GenericEvent];
    GuildVoiceMute => [GenericGuildVoice, GenericGuild, Event, GenericEvent];
    GuildVoiceDeafen => [GenericGuildVoice, GenericGuild, Event, GenericEvent];
    GenericPermissionOverride => [GenericGuild, Event, GenericEvent];
    PermissionOverrideCreate => [GenericPermissionOverride, GenericGuild, Event, GenericEvent];
    PermissionOverrideUpdate => [GenericPermissionOverride, GenericGuild, Event, GenericEvent];
    PermissionOverrideDelete => [GenericPermissionOverride, GenericGuild, Event, GenericEvent];

    // Messages
    GenericMessage => [Event, GenericEvent];
    MessageReceived => [GenericMessage, Event, GenericEvent];
    MessageUpdate => [GenericMessage, Event, GenericEvent];
    MessageDelete => [GenericMessage, Event, GenericEvent];
    MessageReactionRemoveAll => [GenericMessage, Event, GenericEvent];
    GenericMessageReaction => [GenericMessage, Event, GenericEvent];
    MessageReactionAdd => [GenericMessageReaction, GenericMessage, Event, GenericEvent];
    MessageReactionRemove => [GenericMessageReaction, GenericMessage, Event, GenericEvent];
    MessageBulkDelete => [Event, GenericEvent];

    // Roles
    GenericRole => [Event, GenericEvent];
    RoleCreate => [GenericRole, Event, GenericEvent];
    RoleDelete => [GenericRole, Event, GenericEvent];
    GenericRoleUpdate => [GenericRole, Update, Event, GenericEvent];
    RoleUpdateName => [GenericRoleUpdate, GenericRole, Update, Event, GenericEvent];
    RoleUpdateColor => [GenericRoleUpdate, GenericRole, Update, Event, GenericEvent];
    RoleUpdatePosition => [GenericRoleUpdate, GenericRole, Update, Event, GenericEvent];
    RoleUpdateHoisted => [GenericRoleUpdate, GenericRole, Update, Event, GenericEvent];

    // Emojis
    GenericEmoji => [Event, GenericEvent];
    EmojiAdded => [GenericEmoji, Event, GenericEvent];
    EmojiRemoved => [GenericEmoji, Event, GenericEvent];
    GenericEmojiUpdate => [GenericEmoji, Update, Event, GenericEvent];
    EmojiUpdateName => [GenericEmojiUpdate, GenericEmoji, Update, Event, GenericEvent];

    // Stickers
    GenericGuildSticker => [GenericGuild, Event, GenericEvent];
    GuildStickerAdded => [GenericGuildSticker, GenericGuild, Event, GenericEvent];
    GuildStickerRemoved => [GenericGuildSticker, GenericGuild, Event, GenericEvent];
    GenericGuildStickerUpdate => [GenericGuildSticker, GenericGuild, Update, Event, GenericEvent];
    GuildStickerUpdateName => [GenericGuildStickerUpdate, GenericGuildSticker, GenericGuild, Update, Event, GenericEvent];
    GuildStickerUpdateDescription => [GenericGuildStickerUpdate, GenericGuildSticker, GenericGuild, Update, Event, GenericEvent];

    // Stage instances
    GenericStageInstance => [GenericGuild, Event, GenericEvent];
    StageInstanceCreate => [GenericStageInstance, GenericGuild, Event, GenericEvent];
    StageInstanceDelete => [GenericStageInstance, GenericGuild, Event, GenericEvent];
    GenericStageInstanceUpdate => [GenericStageInstance, GenericGuild, Update, Event, GenericEvent];
    StageInstanceUpdateTopic => [GenericStageInstanceUpdate, GenericStageInstance, GenericGuild, Update, Event, GenericEvent];

    // Users
    GenericUser => [Event, GenericEvent];
    UserTyping => [GenericUser, Event, GenericEvent];
    /// Has no dedicated hook; user updates are observed through
    /// [`EventTag::GenericUser`] or the generic update hook.
    GenericUserUpdate => [GenericUser, Update, Event, GenericEvent];
    UserUpdateName => [GenericUserUpdate, GenericUser, Update, Event, GenericEvent];
    UserUpdateAvatar => [GenericUserUpdate, GenericUser, Update, Event, GenericEvent];
    GenericUserPresence => [GenericUser, Event, GenericEvent];
    UserActivityStart => [GenericUserPresence, GenericUser, Event, GenericEvent];
    UserActivityEnd => [GenericUserPresence, GenericUser, Event, GenericEvent];
    /// Both a user update and a presence change.
    UserUpdateOnlineStatus => [GenericUserUpdate, GenericUserPresence, GenericUser, Update, Event, GenericEvent];

    // The logged in account
    GenericSelfUpdate => [Update, Event, GenericEvent];
    SelfUpdateName => [GenericSelfUpdate, Update, Event, GenericEvent];
    SelfUpdateAvatar => [GenericSelfUpdate, Update, Event, GenericEvent];
    SelfUpdateMfa => [GenericSelfUpdate, Update, Event, GenericEvent];

    // Interactions
    GenericInteractionCreate => [Event, GenericEvent];
    GenericCommandInteraction => [GenericInteractionCreate, Event, GenericEvent];
    SlashCommandInteraction => [GenericCommandInteraction, GenericInteractionCreate, Event, GenericEvent];
    GenericContextInteraction => [GenericCommandInteraction, GenericInteractionCreate, Event, GenericEvent];
    UserContextInteraction => [GenericContextInteraction, GenericCommandInteraction, GenericInteractionCreate, Event, GenericEvent];
    MessageContextInteraction => [GenericContextInteraction, GenericCommandInteraction, GenericInteractionCreate, Event, GenericEvent];
    GenericComponentInteractionCreate => [GenericInteractionCreate, Event, GenericEvent];
    ButtonInteraction => [GenericComponentInteractionCreate, GenericInteractionCreate, Event, GenericEvent];
    SelectMenuInteraction => [GenericComponentInteractionCreate, GenericInteractionCreate, Event, GenericEvent];
    ModalInteraction => [GenericInteractionCreate, Event, GenericEvent];
    GenericAutoCompleteInteraction => [GenericInteractionCreate, Event, GenericEvent];
    CommandAutoCompleteInteraction => [GenericAutoCompleteInteraction, GenericInteractionCreate, Event, GenericEvent];
}

impl EventTag {
    /// Tags that are never resolved to a dedicated hook: the root, the base
    /// of every event, and the update marker.
    pub const STRUCTURAL: &'static [EventTag] =
        &[EventTag::GenericEvent, EventTag::Event, EventTag::Update];

    /// Returns `true` for the root and the two structural tags.
    #[must_use]
    pub fn is_structural(self) -> bool {
        Self::STRUCTURAL.contains(&self)
    }

    /// Returns `true` if events carrying this tag are update-shaped.
    #[must_use]
    pub fn is_update(self) -> bool {
        self.lineage().contains(&EventTag::Update)
    }

    /// Returns `true` if `group` appears in this tag's lineage.
    #[must_use]
    pub fn is_a(self, group: EventTag) -> bool {
        self.lineage().contains(&group)
    }

    /// Returns the name of the changed property for update-shaped leaves.
    #[must_use]
    pub fn property_identifier(self) -> Option<&'static str> {
        let identifier = match self {
            EventTag::StatusChange | EventTag::UserUpdateOnlineStatus => "status",
            EventTag::GatewayPing => "gateway-ping",
            EventTag::ChannelUpdateName
            | EventTag::GuildUpdateName
            | EventTag::RoleUpdateName
            | EventTag::EmojiUpdateName
            | EventTag::GuildStickerUpdateName
            | EventTag::UserUpdateName
            | EventTag::SelfUpdateName => "name",
            EventTag::ChannelUpdateTopic | EventTag::StageInstanceUpdateTopic => "topic",
            EventTag::ChannelUpdateNsfw => "nsfw",
            EventTag::ChannelUpdateBitrate => "bitrate",
            EventTag::ChannelUpdateSlowmode => "slowmode",
            EventTag::ChannelUpdatePosition | EventTag::RoleUpdatePosition => "position",
            EventTag::ChannelUpdateParent => "parent",
            EventTag::ChannelUpdateArchived => "archived",
            EventTag::ChannelUpdateLocked => "locked",
            EventTag::GuildUpdateOwner => "owner",
            EventTag::GuildUpdateIcon => "icon",
            EventTag::GuildUpdateAfkTimeout => "afk_timeout",
            EventTag::GuildMemberUpdateNickname => "nick",
            EventTag::GuildMemberUpdateTimeOut => "timeout",
            EventTag::RoleUpdateColor => "color",
            EventTag::RoleUpdateHoisted => "hoist",
            EventTag::GuildStickerUpdateDescription => "description",
            EventTag::UserUpdateAvatar | EventTag::SelfUpdateAvatar => "avatar",
            EventTag::SelfUpdateMfa => "mfa_enabled",
            _ => return None,
        };
        Some(identifier)
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::LEAF_TAGS;

    #[test]
    fn test_every_lineage_starts_with_itself_and_ends_at_root() {
        for &tag in EventTag::ALL {
            let lineage = tag.lineage();
            assert_eq!(lineage.first(), Some(&tag), "{tag} lineage must start with itself");
            assert_eq!(
                lineage.last(),
                Some(&EventTag::GenericEvent),
                "{tag} lineage must end at the root"
            );
        }
    }

    #[test]
    fn test_lineages_have_no_duplicates() {
        for &tag in EventTag::ALL {
            let lineage = tag.lineage();
            for (i, a) in lineage.iter().enumerate() {
                assert!(!lineage[i + 1..].contains(a), "{tag} lists {a} twice");
            }
        }
    }

    #[test]
    fn test_ancestors_are_listed_before_their_own_ancestors() {
        // For every ancestor A of T, A's ancestors must appear after A in T's lineage.
        for &tag in EventTag::ALL {
            let lineage = tag.lineage();
            for (i, ancestor) in lineage.iter().enumerate().skip(1) {
                for grand in &ancestor.lineage()[1..] {
                    let position = lineage.iter().position(|t| t == grand);
                    assert!(
                        position.is_some_and(|p| p > i),
                        "{tag}: {grand} must follow {ancestor}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_leaves_are_never_ancestors() {
        for &tag in EventTag::ALL {
            for ancestor in &tag.lineage()[1..] {
                assert!(!LEAF_TAGS.contains(ancestor), "{tag} descends from leaf {ancestor}");
            }
        }
    }

    #[test]
    fn test_update_leaves_name_their_property() {
        for &tag in LEAF_TAGS {
            assert_eq!(
                tag.is_update(),
                tag.property_identifier().is_some(),
                "{tag}: update shape and property identifier disagree"
            );
        }
    }

    #[test]
    fn test_descriptor_follows_naming_convention() {
        assert_eq!(EventTag::ChannelUpdateName.descriptor(), "ChannelUpdateNameEvent");
        assert_eq!(EventTag::GenericGuild.descriptor(), "GenericGuildEvent");
        assert_eq!(EventTag::GenericEvent.descriptor(), "GenericEvent");
        assert_eq!(EventTag::Event.descriptor(), "Event");
        assert_eq!(EventTag::Update.descriptor(), "UpdateEvent");
    }

    #[test]
    fn test_online_status_sits_under_both_user_groups() {
        let tag = EventTag::UserUpdateOnlineStatus;

        assert!(tag.is_a(EventTag::GenericUserUpdate));
        assert!(tag.is_a(EventTag::GenericUserPresence));
        assert!(tag.is_a(EventTag::GenericUser));
        assert!(tag.is_update());
    }

    #[test]
    fn test_from_str_round_trips_names() {
        for &tag in EventTag::ALL {
            assert_eq!(tag.name().parse::<EventTag>(), Ok(tag));
        }
        assert_eq!(
            "NotAnEvent".parse::<EventTag>(),
            Err(UnknownEventTag("NotAnEvent".to_owned()))
        );
    }
}
