//! Subcommand handlers
//!
//! Each handler opens the matching screen controller over the shared store,
//! drives it, and prints what the screen would show.

use crate::Commands;
use anyhow::{bail, Context as _, Result};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use stitch_core::format::{format_call_duration, format_call_timer, format_clock_time, initials};
use stitch_core::screens::*;
use stitch_core::search::{CallTab, ContactTab};
use stitch_core::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{sleep, sleep_until, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct Context {
    pub store: Arc<DataStore>,
    pub timings: TimingConfig,
    pub json: bool,
}

impl Context {
    /// JSON when `--json` was given, otherwise the human-readable rendering.
    fn print<T: Serialize + ?Sized>(&self, value: &T, human: impl FnOnce()) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human();
        }
        Ok(())
    }

    fn user_name(&self, user_id: &str) -> String {
        self.store
            .get_user_by_id(user_id)
            .map(|u| u.name)
            .unwrap_or_else(|| user_id.to_string())
    }

    fn chat_title(&self, chat: &Chat) -> String {
        chat_params(&self.store, chat)
            .map(|p| p.name)
            .unwrap_or_else(|| chat.id.clone())
    }
}

pub async fn run(ctx: &Context, command: Commands) -> Result<()> {
    let (navigator, mut nav_rx) = Navigator::channel();

    match command {
        Commands::Chats => list_chats(ctx, navigator)?,
        Commands::Messages { chat_id } => show_messages(ctx, navigator, &chat_id)?,
        Commands::Send { chat_id, text } => send_message(ctx, navigator, &chat_id, text).await?,
        Commands::Contacts { query, favorites } => {
            list_contacts(ctx, navigator, query, favorites)?
        }
        Commands::Calls { missed } => list_calls(ctx, navigator, missed)?,
        Commands::Search { query } => search(ctx, navigator, query).await?,
        Commands::Call {
            user_id,
            video,
            incoming,
            hang_up_after,
        } => {
            let call_type = if video { CallType::Video } else { CallType::Voice };
            let hang_up_after = Duration::from_secs(hang_up_after);
            place_call(ctx, navigator, &mut nav_rx, &user_id, call_type, incoming, hang_up_after)
                .await?
        }
        Commands::Block { contact_id } => set_blocked(ctx, navigator, &contact_id, true)?,
        Commands::Unblock { contact_id } => set_blocked(ctx, navigator, &contact_id, false)?,
        Commands::Settings => show_settings(ctx)?,
        Commands::Notifications => list_notifications(ctx, navigator)?,
    }

    while let Ok(cmd) = nav_rx.try_recv() {
        tracing::debug!("Navigation: {:?}", cmd);
    }

    Ok(())
}

fn local_time(time: &DateTime<Utc>) -> String {
    format_clock_time(&time.with_timezone(&Local))
}

// ============================================================================
// Chats
// ============================================================================

fn list_chats(ctx: &Context, navigator: Navigator) -> Result<()> {
    let screen = ChatListScreen::open(ctx.store.clone(), navigator);
    let chats = screen.visible_chats();

    ctx.print(&chats, || {
        for chat in &chats {
            let pin = if chat.is_pinned { "*" } else { " " };
            let unread = match chat.unread_count {
                0 => String::new(),
                n => format!(" ({n})"),
            };
            println!("{pin} [{}] {}{unread}", chat.id, ctx.chat_title(chat));
            if let Some(last) = &chat.last_message {
                println!("      {}  {}", local_time(&last.timestamp), last.text);
            }
        }
        if let Some(total) = screen.total_unread() {
            println!("{total} unread");
        }
    })
}

fn open_chat(ctx: &Context, navigator: Navigator, chat_id: &str) -> Result<ChatScreen> {
    let chat = ctx
        .store
        .get_chat(chat_id)
        .with_context(|| format!("No chat with id {chat_id}"))?;
    let params = chat_params(&ctx.store, &chat)
        .with_context(|| format!("Chat {chat_id} has no known participant"))?;

    Ok(ChatScreen::open(
        params,
        ctx.store.clone(),
        navigator,
        ctx.timings.clone(),
    )?)
}

fn print_message(ctx: &Context, message: &Message) {
    println!(
        "{:>8}  {}: {}",
        local_time(&message.timestamp),
        ctx.user_name(&message.sender_id),
        message.text
    );
}

fn show_messages(ctx: &Context, navigator: Navigator, chat_id: &str) -> Result<()> {
    let screen = open_chat(ctx, navigator, chat_id)?;
    let messages = screen.messages();

    ctx.print(&messages, || {
        println!("{}", screen.params().name);
        for message in &messages {
            print_message(ctx, message);
        }
    })
}

async fn send_message(ctx: &Context, navigator: Navigator, chat_id: &str, text: String) -> Result<()> {
    let screen = open_chat(ctx, navigator, chat_id)?;
    screen.set_draft(text);

    let Some(sent) = screen.send() else {
        bail!("Nothing to send");
    };
    if !ctx.json {
        print_message(ctx, &sent);
        println!("          typing...");
    }

    while screen.reply_pending() {
        sleep(POLL_INTERVAL).await;
    }

    let messages = screen.messages();
    let reply = messages.last().filter(|m| !m.is_own());

    if ctx.json {
        ctx.print(&(sent, reply), || {})
    } else {
        if let Some(reply) = reply {
            print_message(ctx, reply);
        }
        Ok(())
    }
}

// ============================================================================
// Contacts
// ============================================================================

fn list_contacts(
    ctx: &Context,
    navigator: Navigator,
    query: Option<String>,
    favorites: bool,
) -> Result<()> {
    let mut screen = ContactsScreen::open(ctx.store.clone(), navigator);
    if let Some(query) = query {
        screen.set_query(query);
    }
    if favorites {
        screen.select_tab(ContactTab::Favorites);
    }

    let sections = screen.sections();
    ctx.print(&sections, || {
        for section in &sections {
            println!("{}", section.title);
            for contact in &section.items {
                let mut tags = Vec::new();
                if contact.is_favorite {
                    tags.push("favorite");
                }
                if contact.is_blocked {
                    tags.push("blocked");
                }
                if !contact.is_registered {
                    tags.push("invite");
                }
                let tags = if tags.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", tags.join(", "))
                };
                println!(
                    "  {:<3} {} ({})  {}{tags}",
                    initials(&contact.name),
                    contact.name,
                    contact.id,
                    contact.phone
                );
            }
        }
        println!("{} favorites", screen.favorites_count());
    })
}

fn set_blocked(ctx: &Context, navigator: Navigator, contact_id: &str, block: bool) -> Result<()> {
    let mut screen = ContactsScreen::open(ctx.store.clone(), navigator);
    if block {
        screen.block(contact_id)?;
    } else {
        screen.unblock(contact_id)?;
    }

    let blocked = ctx.store.get_settings().privacy.blocked_users;
    ctx.print(&blocked, || {
        let verb = if block { "Blocked" } else { "Unblocked" };
        println!("{verb} {contact_id}");
    })
}

// ============================================================================
// Calls
// ============================================================================

fn call_label(call: &Call) -> &'static str {
    match (call.status, call.call_type) {
        (CallStatus::Incoming, CallType::Voice) => "incoming voice",
        (CallStatus::Incoming, CallType::Video) => "incoming video",
        (CallStatus::Outgoing, CallType::Voice) => "outgoing voice",
        (CallStatus::Outgoing, CallType::Video) => "outgoing video",
        (CallStatus::Missed, CallType::Voice) => "missed voice",
        (CallStatus::Missed, CallType::Video) => "missed video",
    }
}

fn list_calls(ctx: &Context, navigator: Navigator, missed: bool) -> Result<()> {
    let mut screen = CallsScreen::open(ctx.store.clone(), navigator);
    if missed {
        screen.select_tab(CallTab::Missed);
    }

    let sections = screen.sections(&Local::now());
    ctx.print(&sections, || {
        for section in &sections {
            println!("{}", section.title);
            for call in &section.items {
                let name = ctx
                    .store
                    .user_for_call(call)
                    .map(|u| u.name)
                    .unwrap_or_else(|| "Unknown".to_string());
                println!(
                    "  {:>8}  {name}  {}  {}",
                    local_time(&call.timestamp),
                    call_label(call),
                    format_call_duration(call.duration)
                );
            }
        }
        println!("{} missed", screen.missed_count());
    })
}

/// Runs a call screen until it dismisses itself.
async fn place_call(
    ctx: &Context,
    navigator: Navigator,
    nav_rx: &mut UnboundedReceiver<NavCommand>,
    user_id: &str,
    call_type: CallType,
    incoming: bool,
    hang_up_after: Duration,
) -> Result<()> {
    let user = ctx
        .store
        .get_user_by_id(user_id)
        .with_context(|| format!("No user with id {user_id}"))?;
    if user.id == CURRENT_USER_ID {
        bail!("Cannot call yourself");
    }

    let params = CallParams {
        name: user.name,
        avatar: user.avatar,
        call_type,
        is_incoming: incoming,
    };
    tracing::info!("Opening {:?} call with {}", call_type, params.name);

    let screen = CallScreen::open(params, ctx.timings.clone(), navigator);
    let mut phases = screen.phase_changes();
    report_call(ctx, &screen)?;

    if incoming {
        screen.accept();
    }

    let mut hang_up_at: Option<Instant> = None;
    loop {
        tokio::select! {
            changed = phases.changed() => {
                if changed.is_err() {
                    break;
                }
                let phase = *phases.borrow_and_update();
                report_call(ctx, &screen)?;
                if phase == CallPhase::Connected {
                    hang_up_at = Some(Instant::now() + hang_up_after);
                }
            }
            _ = wait_until(hang_up_at) => {
                hang_up_at = None;
                screen.end();
            }
            cmd = nav_rx.recv() => match cmd {
                Some(NavCommand::GoBack) | None => break,
                Some(other) => tracing::debug!("Navigation: {:?}", other),
            },
        }
    }

    if !ctx.json {
        println!("Duration {}", format_call_timer(screen.duration_secs()));
    }
    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn report_call(ctx: &Context, screen: &CallScreen) -> Result<()> {
    let snapshot = screen.snapshot();
    if ctx.json {
        println!("{}", serde_json::to_string(&snapshot)?);
    } else {
        println!("{}: {}", screen.params().name, snapshot.status_text);
    }
    Ok(())
}

// ============================================================================
// Search
// ============================================================================

async fn search(ctx: &Context, navigator: Navigator, query: String) -> Result<()> {
    let screen = GlobalSearchScreen::open(ctx.store.clone(), navigator, ctx.timings.clone());
    screen.set_query(query);

    while screen.is_searching() {
        sleep(POLL_INTERVAL).await;
    }

    let results = screen.results();
    ctx.print(&results, || {
        if screen.shows_no_results() {
            println!("No results for \"{}\"", screen.query());
            return;
        }
        if !results.chats.is_empty() {
            println!("Chats");
            for chat in &results.chats {
                println!("  [{}] {}", chat.id, ctx.chat_title(chat));
            }
        }
        if !results.contacts.is_empty() {
            println!("Contacts");
            for user in &results.contacts {
                println!("  {} (@{})  {}", user.name, user.username, user.email);
            }
        }
        if !results.messages.is_empty() {
            println!("Messages");
            for message in &results.messages {
                println!(
                    "  [{}] {}: {}",
                    message.chat_id,
                    ctx.user_name(&message.sender_id),
                    message.text
                );
            }
        }
    })
}

// ============================================================================
// Notifications
// ============================================================================

fn list_notifications(ctx: &Context, navigator: Navigator) -> Result<()> {
    let screen = NotificationsScreen::open(ctx.store.clone(), navigator);
    let notifications = screen.notifications();

    ctx.print(notifications, || {
        for n in notifications {
            let marker = if n.read { " " } else { "*" };
            println!("{marker} [{}] {}", n.id, n.title);
            if let Some(subtitle) = &n.subtitle {
                println!("      {subtitle}");
            }
            if n.actionable {
                println!("      accept / decline");
            }
        }
        println!("{} unread", screen.unread_count());
    })
}

// ============================================================================
// Settings
// ============================================================================

#[derive(Serialize)]
struct SettingsView<'a> {
    settings: &'a Settings,
    blocked_users: &'a [User],
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

fn show_settings(ctx: &Context) -> Result<()> {
    let screen = SettingsScreen::open(ctx.store.clone());
    let settings = screen.settings();
    let view = SettingsView {
        settings,
        blocked_users: screen.blocked_users(),
    };

    ctx.print(&view, || {
        let n = &settings.notifications;
        println!("Notifications");
        println!("  enabled              {}", on_off(n.enabled));
        println!("  message preview      {}", on_off(n.message_preview));
        println!("  sound                {}", on_off(n.sound));
        println!("  vibration            {}", on_off(n.vibration));
        println!("  group notifications  {}", on_off(n.group_notifications));

        let p = &settings.privacy;
        println!("Privacy");
        println!("  last seen            {:?}", p.last_seen);
        println!("  profile photo        {:?}", p.profile_photo);
        println!("  status               {:?}", p.status);
        println!("  read receipts        {}", on_off(p.read_receipts));

        let c = &settings.chat;
        println!("Chat");
        println!("  font size            {:?}", c.font_size);
        println!("  wallpaper            {}", c.wallpaper);
        println!("  enter to send        {}", on_off(c.enter_to_send));
        println!("  media auto-download  {}", on_off(c.media_auto_download));

        let s = &settings.security;
        println!("Security");
        println!("  screen lock          {}", on_off(s.screen_lock));
        println!("  fingerprint          {}", on_off(s.fingerprint));
        println!("  two-factor auth      {}", on_off(s.two_factor_auth));

        println!("Blocked users");
        if view.blocked_users.is_empty() {
            println!("  none");
        }
        for user in view.blocked_users {
            println!("  {} ({})", user.name, user.id);
        }
    })
}
