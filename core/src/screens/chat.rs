//! Chat thread screen

use crate::config::TimingConfig;
use crate::error::{Error, Result};
use crate::models::{CallType, Message, MessageStatus, MessageType, CURRENT_USER_ID};
use crate::navigation::{CallParams, ChatParams, Navigator, Route};
use crate::seed::AUTO_RESPONSES;
use crate::store::DataStore;
use crate::timer::TaskSet;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

struct ThreadState {
    messages: Vec<Message>,
    draft: String,
    is_typing: bool,
    /// Replies scheduled and not yet delivered, one per send.
    pending_replies: usize,
    tasks: TaskSet,
}

pub struct ChatScreen {
    params: ChatParams,
    /// Sender of canned replies: the other member of a private chat, or the
    /// first other member of a group.
    responder_id: String,
    store: Arc<DataStore>,
    navigator: Navigator,
    timings: TimingConfig,
    state: Arc<Mutex<ThreadState>>,
}

impl ChatScreen {
    pub fn open(
        params: ChatParams,
        store: Arc<DataStore>,
        navigator: Navigator,
        timings: TimingConfig,
    ) -> Result<Self> {
        let chat = store
            .get_chat(&params.chat_id)
            .ok_or_else(|| Error::ChatNotFound(params.chat_id.clone()))?;

        let responder_id = chat
            .other_participant()
            .unwrap_or(CURRENT_USER_ID)
            .to_string();
        let messages = store.get_messages(&chat.id);

        Ok(Self {
            params,
            responder_id,
            store,
            navigator,
            timings,
            state: Arc::new(Mutex::new(ThreadState {
                messages,
                draft: String::new(),
                is_typing: false,
                pending_replies: 0,
                tasks: TaskSet::new(),
            })),
        })
    }

    pub fn params(&self) -> &ChatParams {
        &self.params
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.lock().messages.clone()
    }

    pub fn draft(&self) -> String {
        self.state.lock().draft.clone()
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        self.state.lock().draft = text.into();
    }

    pub fn is_typing(&self) -> bool {
        self.state.lock().is_typing
    }

    /// Sends the trimmed draft and schedules one canned reply. Each send gets
    /// its own reply, even while earlier ones are still pending.
    ///
    /// Blank drafts are ignored. Must be called from within a tokio runtime.
    pub fn send(&self) -> Option<Message> {
        let mut guard = self.state.lock();
        let text = guard.draft.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let message = self.store.send_message(&self.params.chat_id, &text);
        guard.messages.push(message.clone());
        guard.draft.clear();
        guard.is_typing = true;
        guard.pending_replies += 1;

        let weak = Arc::downgrade(&self.state);
        let store = self.store.clone();
        let chat_id = self.params.chat_id.clone();
        let responder_id = self.responder_id.clone();
        guard
            .tasks
            .queue(self.timings.auto_reply_delay(), move || {
                let Some(state) = weak.upgrade() else {
                    return;
                };
                let reply = Message {
                    id: uuid::Uuid::new_v4().to_string(),
                    chat_id,
                    sender_id: responder_id,
                    text: store.pick(AUTO_RESPONSES).to_string(),
                    timestamp: Utc::now(),
                    message_type: MessageType::Text,
                    status: MessageStatus::Delivered,
                    reply_to: None,
                    attachments: Vec::new(),
                };
                log::debug!("Auto-reply in chat {}: {}", reply.chat_id, reply.text);

                let mut guard = state.lock();
                guard.pending_replies = guard.pending_replies.saturating_sub(1);
                guard.is_typing = guard.pending_replies > 0;
                guard.messages.push(reply);
            });

        Some(message)
    }

    pub fn reply_pending(&self) -> bool {
        self.state.lock().pending_replies > 0
    }

    pub fn start_call(&self, call_type: CallType) {
        self.navigator.navigate(Route::for_call(CallParams {
            name: self.params.name.clone(),
            avatar: self.params.avatar.clone(),
            call_type,
            is_incoming: false,
        }));
    }

    pub fn go_back(&self) {
        self.navigator.go_back();
    }
}

impl Drop for ChatScreen {
    fn drop(&mut self) {
        self.state.lock().tasks.cancel_all();
    }
}
