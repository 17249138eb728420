use tokio::task::JoinHandle;

use crate::chat::ChatSession;
use crate::config::Config;
use crate::content::QuestionBank;
use crate::gateway::{GeminiClient, VerseRecord, FAILURE_REPLY};
use crate::quiz::QuizSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Chat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    // Core state
    pub should_quit: bool,
    pub screen: Screen,
    pub input_mode: InputMode,

    // Home: daily verse card
    pub daily_verse: Option<VerseRecord>,
    pub verse_task: Option<JoinHandle<Option<VerseRecord>>>,

    // Quiz state
    pub quiz: QuizSession,

    // Chat state
    pub chat: ChatSession,
    pub chat_input: String,
    pub chat_cursor: usize, // cursor position in chat_input, in chars
    pub chat_scroll: u16,   // lines scrolled up from the bottom of the chat
    pub chat_task: Option<JoinHandle<String>>,

    // Animation state
    pub animation_frame: u8, // 0-2 for ellipsis animation

    // Data
    pub bank: QuestionBank,
    pub gateway: GeminiClient,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let bank = QuestionBank::new();
        let api_key = config.resolved_api_key().unwrap_or_default();
        let gateway = GeminiClient::new(&api_key, &config.resolved_model())?;
        let quiz = QuizSession::new(bank.questions().to_vec());

        Ok(Self {
            should_quit: false,
            screen: Screen::Home,
            input_mode: InputMode::Normal,

            daily_verse: None,
            verse_task: None,

            quiz,

            chat: ChatSession::new(),
            chat_input: String::new(),
            chat_cursor: 0,
            chat_scroll: 0,
            chat_task: None,

            animation_frame: 0,

            bank,
            gateway,
        })
    }

    /// One-shot fetch of the daily verse, spawned at startup. No retry; the
    /// home screen keeps its skeleton card if the fetch fails.
    pub fn spawn_verse_fetch(&mut self) {
        let gateway = self.gateway.clone();
        self.verse_task = Some(tokio::spawn(async move { gateway.daily_verse().await }));
    }

    /// Kick off a chat exchange for the current input. The session rejects
    /// blank messages and re-entrant submits, so this is a no-op in both
    /// cases and the input line is left as typed.
    pub fn submit_chat_message(&mut self) {
        if self.chat_task.is_some() {
            return;
        }
        let text = self.chat_input.clone();
        let Some(history) = self.chat.submit(&text) else {
            return;
        };
        self.chat_input.clear();
        self.chat_cursor = 0;
        self.chat_scroll = 0;

        let gateway = self.gateway.clone();
        let message = text.trim().to_string();
        self.chat_task = Some(tokio::spawn(async move {
            gateway.converse(&history, &message).await
        }));
    }

    /// Collect finished gateway tasks. Called from the event loop; the tick
    /// timer guarantees it runs shortly after a task completes.
    pub async fn drain_tasks(&mut self) {
        let verse_done = self
            .verse_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if verse_done {
            if let Some(task) = self.verse_task.take() {
                self.daily_verse = task.await.unwrap_or(None);
            }
        }

        let chat_done = self
            .chat_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if chat_done {
            if let Some(task) = self.chat_task.take() {
                // A panicked task still resolves the exchange
                let reply = task.await.unwrap_or_else(|_| FAILURE_REPLY.to_string());
                self.chat.resolve(reply);
                self.chat_scroll = 0;
            }
        }
    }

    /// Tick animation frame (called by Tick event)
    pub fn tick_animation(&mut self) {
        if self.chat.is_pending() || self.verse_task.is_some() {
            self.animation_frame = (self.animation_frame + 1) % 3;
        }
    }
}
