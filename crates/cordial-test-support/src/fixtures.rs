//! Event fixtures: a sample payload for every leaf tag.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use cordial_core::clock::Clock;
use cordial_core::session::{SessionContext, ShardInfo};
use cordial_core::snowflake::Snowflake;
use cordial_events::payload::channel::{ChannelRef, ThreadMember, ThreadRef};
use cordial_events::payload::custom::CustomEvent;
use cordial_events::payload::entity::{EmojiRef, RoleRef, StageInstanceRef, StickerRef};
use cordial_events::payload::guild::{
    GuildRef, GuildUser, Invite, MemberRoles, PermissionOverride, VoiceFlag,
};
use cordial_events::payload::interaction::{
    AutoComplete, CommandInteraction, ComponentInteraction, ContextInteraction, ModalSubmit,
};
use cordial_events::payload::lifecycle::{
    Disconnect, Exception, GatewayPing, HttpRequest, RawGateway, Ready, Reconnected, Resumed,
    Shutdown, Status, StatusChange,
};
use cordial_events::payload::message::{BulkDelete, Message, MessageRef, Reaction};
use cordial_events::payload::user::{Activity, OnlineStatus, Typing};
use cordial_events::{Event, EventKind, EventTag, PropertyChange};
use uuid::Uuid;

use crate::clock::FixedClock;

const GUILD: Snowflake = Snowflake(81_384_788_765_712_384);
const CHANNEL: Snowflake = Snowflake(381_870_553_235_193_857);
const USER: Snowflake = Snowflake(80_351_110_224_678_912);
const MESSAGE: Snowflake = Snowflake(1_100_000_000_000_000_001);

/// A session with a nil id on the only shard.
#[must_use]
pub fn session() -> Arc<SessionContext> {
    Arc::new(SessionContext::with_id(Uuid::nil(), ShardInfo::SINGLE))
}

/// Builds events with increasing response numbers, starting at 1.
#[derive(Debug)]
pub struct EventFactory {
    session: Arc<SessionContext>,
    clock: FixedClock,
    next: AtomicI64,
}

impl Default for EventFactory {
    fn default() -> Self {
        Self::new(session())
    }
}

impl EventFactory {
    /// Create a factory for events received by `session`.
    #[must_use]
    pub fn new(session: Arc<SessionContext>) -> Self {
        Self {
            session,
            clock: FixedClock::default(),
            next: AtomicI64::new(1),
        }
    }

    /// Wrap `kind` in an event with the next response number.
    pub fn event(&self, kind: EventKind) -> Event {
        let response_number = self.next.fetch_add(1, Ordering::Relaxed);
        Event::new(
            Arc::clone(&self.session),
            response_number,
            self.clock.now(),
            kind,
        )
    }

    /// Build an event carrying the sample payload for `tag`.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is a group or structural tag.
    pub fn sample(&self, tag: EventTag) -> Event {
        let kind = sample_kind(tag).unwrap_or_else(|| panic!("{tag} is not a leaf tag"));
        self.event(kind)
    }
}

fn change<T>(old_value: T, new_value: T) -> PropertyChange<T> {
    PropertyChange::new(GUILD, old_value, new_value)
}

fn guild_user() -> GuildUser {
    GuildUser {
        guild_id: GUILD,
        user_id: USER,
    }
}

fn guild_ref() -> GuildRef {
    GuildRef { guild_id: GUILD }
}

fn thread_ref() -> ThreadRef {
    ThreadRef {
        guild_id: GUILD,
        thread_id: Snowflake(CHANNEL.0 + 1),
        parent_id: CHANNEL,
    }
}

fn thread_member() -> ThreadMember {
    ThreadMember {
        thread_id: Snowflake(CHANNEL.0 + 1),
        member_id: USER,
    }
}

fn member_roles() -> MemberRoles {
    MemberRoles {
        guild_id: GUILD,
        member_id: USER,
        role_ids: vec![Snowflake(42)],
    }
}

fn invite() -> Invite {
    Invite {
        guild_id: GUILD,
        channel_id: CHANNEL,
        code: "cordial".to_owned(),
    }
}

fn voice_flag() -> VoiceFlag {
    VoiceFlag {
        guild_id: GUILD,
        member_id: USER,
        enabled: true,
    }
}

fn permission_override() -> PermissionOverride {
    PermissionOverride {
        guild_id: GUILD,
        channel_id: CHANNEL,
        target_id: Snowflake(42),
        allow: 0x400,
        deny: 0x800,
    }
}

fn message() -> Message {
    Message {
        guild_id: Some(GUILD),
        channel_id: CHANNEL,
        message_id: MESSAGE,
        author_id: USER,
        content: "hello there".to_owned(),
    }
}

fn message_ref() -> MessageRef {
    MessageRef {
        guild_id: Some(GUILD),
        channel_id: CHANNEL,
        message_id: MESSAGE,
    }
}

fn reaction() -> Reaction {
    Reaction {
        channel_id: CHANNEL,
        message_id: MESSAGE,
        user_id: Some(USER),
        emoji: "👍".to_owned(),
    }
}

fn role_ref() -> RoleRef {
    RoleRef {
        guild_id: GUILD,
        role_id: Snowflake(42),
    }
}

fn emoji_ref() -> EmojiRef {
    EmojiRef {
        guild_id: GUILD,
        emoji_id: Snowflake(7),
        name: "party".to_owned(),
    }
}

fn sticker_ref() -> StickerRef {
    StickerRef {
        guild_id: GUILD,
        sticker_id: Snowflake(8),
    }
}

fn stage_ref() -> StageInstanceRef {
    StageInstanceRef {
        guild_id: GUILD,
        channel_id: CHANNEL,
        stage_instance_id: Snowflake(9),
    }
}

fn activity() -> Activity {
    Activity {
        guild_id: GUILD,
        user_id: USER,
        name: "Chess".to_owned(),
    }
}

fn context(command_name: &str) -> ContextInteraction {
    ContextInteraction {
        interaction_id: Snowflake(100),
        user_id: USER,
        command_name: command_name.to_owned(),
        target_id: MESSAGE,
    }
}

fn component(custom_id: &str, values: Vec<String>) -> ComponentInteraction {
    ComponentInteraction {
        interaction_id: Snowflake(100),
        user_id: USER,
        message_id: MESSAGE,
        custom_id: custom_id.to_owned(),
        values,
    }
}

/// Returns a representative payload for a leaf tag, or `None` for group and
/// structural tags.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn sample_kind(tag: EventTag) -> Option<EventKind> {
    let kind = match tag {
        EventTag::Ready => EventKind::Ready(Ready {
            guild_available_count: 3,
            guild_unavailable_count: 0,
        }),
        EventTag::Resumed => EventKind::Resumed(Resumed {}),
        EventTag::Reconnected => EventKind::Reconnected(Reconnected {}),
        EventTag::Disconnect => EventKind::Disconnect(Disconnect {
            close_code: Some(1006),
            closed_by_server: true,
        }),
        EventTag::Shutdown => EventKind::Shutdown(Shutdown {
            close_code: Some(1000),
        }),
        EventTag::StatusChange => EventKind::StatusChange(StatusChange {
            old_status: Status::LoadingSubsystems,
            new_status: Status::Connected,
        }),
        EventTag::GatewayPing => EventKind::GatewayPing(GatewayPing {
            old_ping_ms: 41,
            new_ping_ms: 57,
        }),
        EventTag::Exception => EventKind::Exception(Exception {
            message: "rate limited".to_owned(),
            logged: false,
        }),
        EventTag::RawGateway => EventKind::RawGateway(RawGateway {
            package_type: "MESSAGE_CREATE".to_owned(),
            package: serde_json::json!({ "op": 0 }),
        }),
        EventTag::HttpRequest => EventKind::HttpRequest(HttpRequest {
            method: "GET".to_owned(),
            route: "/gateway/bot".to_owned(),
            status: Some(200),
        }),
        EventTag::Custom => EventKind::Custom(CustomEvent {
            name: "tick".to_owned(),
            data: serde_json::Value::Null,
        }),

        EventTag::ChannelCreate => EventKind::ChannelCreate(ChannelRef {
            guild_id: Some(GUILD),
            channel_id: CHANNEL,
        }),
        EventTag::ChannelDelete => EventKind::ChannelDelete(ChannelRef {
            guild_id: Some(GUILD),
            channel_id: CHANNEL,
        }),
        EventTag::ChannelUpdateName => {
            EventKind::ChannelUpdateName(change("general".to_owned(), "lobby".to_owned()))
        }
        EventTag::ChannelUpdateTopic => {
            EventKind::ChannelUpdateTopic(change(None, Some("be nice".to_owned())))
        }
        EventTag::ChannelUpdateNsfw => EventKind::ChannelUpdateNsfw(change(false, true)),
        EventTag::ChannelUpdateBitrate => EventKind::ChannelUpdateBitrate(change(64_000, 96_000)),
        EventTag::ChannelUpdateSlowmode => EventKind::ChannelUpdateSlowmode(change(0, 30)),
        EventTag::ChannelUpdatePosition => EventKind::ChannelUpdatePosition(change(2, 0)),
        EventTag::ChannelUpdateParent => {
            EventKind::ChannelUpdateParent(change(None, Some(Snowflake(5))))
        }
        EventTag::ChannelUpdateArchived => EventKind::ChannelUpdateArchived(change(false, true)),
        EventTag::ChannelUpdateLocked => EventKind::ChannelUpdateLocked(change(true, false)),

        EventTag::ThreadRevealed => EventKind::ThreadRevealed(thread_ref()),
        EventTag::ThreadHidden => EventKind::ThreadHidden(thread_ref()),
        EventTag::ThreadMemberJoin => EventKind::ThreadMemberJoin(thread_member()),
        EventTag::ThreadMemberLeave => EventKind::ThreadMemberLeave(thread_member()),

        EventTag::GuildReady => EventKind::GuildReady(guild_ref()),
        EventTag::GuildJoin => EventKind::GuildJoin(guild_ref()),
        EventTag::GuildLeave => EventKind::GuildLeave(guild_ref()),
        EventTag::GuildAvailable => EventKind::GuildAvailable(guild_ref()),
        EventTag::GuildUnavailable => EventKind::GuildUnavailable(guild_ref()),
        EventTag::GuildBan => EventKind::GuildBan(guild_user()),
        EventTag::GuildUnban => EventKind::GuildUnban(guild_user()),
        EventTag::GuildMemberRemove => EventKind::GuildMemberRemove(guild_user()),
        EventTag::UnavailableGuildJoined => EventKind::UnavailableGuildJoined(guild_ref()),
        EventTag::GuildUpdateName => {
            EventKind::GuildUpdateName(change("Cordial".to_owned(), "Cordial HQ".to_owned()))
        }
        EventTag::GuildUpdateOwner => EventKind::GuildUpdateOwner(change(USER, Snowflake(43))),
        EventTag::GuildUpdateIcon => {
            EventKind::GuildUpdateIcon(change(Some("a1b2".to_owned()), None))
        }
        EventTag::GuildUpdateAfkTimeout => EventKind::GuildUpdateAfkTimeout(change(300, 900)),
        EventTag::GuildMemberJoin => EventKind::GuildMemberJoin(guild_user()),
        EventTag::GuildMemberRoleAdd => EventKind::GuildMemberRoleAdd(member_roles()),
        EventTag::GuildMemberRoleRemove => EventKind::GuildMemberRoleRemove(member_roles()),
        EventTag::GuildMemberUpdateNickname => {
            EventKind::GuildMemberUpdateNickname(change(None, Some("mod".to_owned())))
        }
        EventTag::GuildMemberUpdateTimeOut => {
            EventKind::GuildMemberUpdateTimeOut(change(None, Some(Utc::now())))
        }
        EventTag::GuildInviteCreate => EventKind::GuildInviteCreate(invite()),
        EventTag::GuildInviteDelete => EventKind::GuildInviteDelete(invite()),
        EventTag::GuildVoiceMute => EventKind::GuildVoiceMute(voice_flag()),
        EventTag::GuildVoiceDeafen => EventKind::GuildVoiceDeafen(voice_flag()),
        EventTag::PermissionOverrideCreate => {
            EventKind::PermissionOverrideCreate(permission_override())
        }
        EventTag::PermissionOverrideUpdate => {
            EventKind::PermissionOverrideUpdate(permission_override())
        }
        EventTag::PermissionOverrideDelete => {
            EventKind::PermissionOverrideDelete(permission_override())
        }

        EventTag::MessageReceived => EventKind::MessageReceived(message()),
        EventTag::MessageUpdate => EventKind::MessageUpdate(message()),
        EventTag::MessageDelete => EventKind::MessageDelete(message_ref()),
        EventTag::MessageReactionRemoveAll => EventKind::MessageReactionRemoveAll(message_ref()),
        EventTag::MessageReactionAdd => EventKind::MessageReactionAdd(reaction()),
        EventTag::MessageReactionRemove => EventKind::MessageReactionRemove(reaction()),
        EventTag::MessageBulkDelete => EventKind::MessageBulkDelete(BulkDelete {
            channel_id: CHANNEL,
            message_ids: vec![MESSAGE, Snowflake(MESSAGE.0 + 1)],
        }),

        EventTag::RoleCreate => EventKind::RoleCreate(role_ref()),
        EventTag::RoleDelete => EventKind::RoleDelete(role_ref()),
        EventTag::RoleUpdateName => {
            EventKind::RoleUpdateName(change("member".to_owned(), "regular".to_owned()))
        }
        EventTag::RoleUpdateColor => EventKind::RoleUpdateColor(change(0x99_aab5, 0x58_65f2)),
        EventTag::RoleUpdatePosition => EventKind::RoleUpdatePosition(change(3, 4)),
        EventTag::RoleUpdateHoisted => EventKind::RoleUpdateHoisted(change(false, true)),

        EventTag::EmojiAdded => EventKind::EmojiAdded(emoji_ref()),
        EventTag::EmojiRemoved => EventKind::EmojiRemoved(emoji_ref()),
        EventTag::EmojiUpdateName => {
            EventKind::EmojiUpdateName(change("party".to_owned(), "partyparrot".to_owned()))
        }

        EventTag::GuildStickerAdded => EventKind::GuildStickerAdded(sticker_ref()),
        EventTag::GuildStickerRemoved => EventKind::GuildStickerRemoved(sticker_ref()),
        EventTag::GuildStickerUpdateName => {
            EventKind::GuildStickerUpdateName(change("wave".to_owned(), "hello".to_owned()))
        }
        EventTag::GuildStickerUpdateDescription => EventKind::GuildStickerUpdateDescription(
            change("a wave".to_owned(), "a friendly wave".to_owned()),
        ),

        EventTag::StageInstanceCreate => EventKind::StageInstanceCreate(stage_ref()),
        EventTag::StageInstanceDelete => EventKind::StageInstanceDelete(stage_ref()),
        EventTag::StageInstanceUpdateTopic => EventKind::StageInstanceUpdateTopic(change(
            "office hours".to_owned(),
            "release party".to_owned(),
        )),

        EventTag::UserTyping => EventKind::UserTyping(Typing {
            guild_id: Some(GUILD),
            channel_id: CHANNEL,
            user_id: USER,
        }),
        EventTag::UserUpdateName => {
            EventKind::UserUpdateName(change("cordial".to_owned(), "cordial_bot".to_owned()))
        }
        EventTag::UserUpdateAvatar => {
            EventKind::UserUpdateAvatar(change(None, Some("f00d".to_owned())))
        }
        EventTag::UserUpdateOnlineStatus => EventKind::UserUpdateOnlineStatus(change(
            OnlineStatus::Idle,
            OnlineStatus::Online,
        )),
        EventTag::UserActivityStart => EventKind::UserActivityStart(activity()),
        EventTag::UserActivityEnd => EventKind::UserActivityEnd(activity()),

        EventTag::SelfUpdateName => {
            EventKind::SelfUpdateName(change("cordial".to_owned(), "cordial-dev".to_owned()))
        }
        EventTag::SelfUpdateAvatar => {
            EventKind::SelfUpdateAvatar(change(Some("f00d".to_owned()), None))
        }
        EventTag::SelfUpdateMfa => EventKind::SelfUpdateMfa(change(false, true)),

        EventTag::SlashCommandInteraction => {
            EventKind::SlashCommandInteraction(CommandInteraction {
                interaction_id: Snowflake(100),
                user_id: USER,
                channel_id: Some(CHANNEL),
                command_name: "ping".to_owned(),
                options: BTreeMap::new(),
            })
        }
        EventTag::UserContextInteraction => {
            EventKind::UserContextInteraction(context("Report user"))
        }
        EventTag::MessageContextInteraction => {
            EventKind::MessageContextInteraction(context("Bookmark"))
        }
        EventTag::ButtonInteraction => {
            EventKind::ButtonInteraction(component("confirm", Vec::new()))
        }
        EventTag::SelectMenuInteraction => EventKind::SelectMenuInteraction(component(
            "colour",
            vec!["red".to_owned()],
        )),
        EventTag::ModalInteraction => EventKind::ModalInteraction(ModalSubmit {
            interaction_id: Snowflake(100),
            user_id: USER,
            modal_id: "feedback".to_owned(),
            fields: BTreeMap::from([("body".to_owned(), "great bot".to_owned())]),
        }),
        EventTag::CommandAutoCompleteInteraction => {
            EventKind::CommandAutoCompleteInteraction(AutoComplete {
                interaction_id: Snowflake(100),
                user_id: USER,
                command_name: "play".to_owned(),
                focused_option: "song".to_owned(),
                value: "never gon".to_owned(),
            })
        }

        _ => return None,
    };
    Some(kind)
}
