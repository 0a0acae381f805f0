use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::lock::Mutex;
use log::{info, warn};

use super::script::{
    classify_free_text, Choice, Continuation, Intent, Topic, ASK_QUESTION, BOOK_CALL, DEFLECTION,
    FAREWELL, GREETING, GREETING_ACK, NEXT_STEP_MENU, NEXT_STEP_PROMPT, PRICING_ACK, TOPIC_MENU,
};
use super::transcript::{ChatOption, OptionSet, OptionSetId, SurfaceEvent};

/// The chat window as the engine sees it.
pub trait Surface {
    fn set_typing(&self, typing: bool);
    fn append_bot(&self, text: &str);
    fn append_user(&self, text: &str);
    fn append_options(&self, set: OptionSet);
    fn remove_options(&self, id: OptionSetId);
    fn scroll_to_latest(&self);
    /// Shows and focuses the free-text input.
    fn reveal_input(&self);
}

/// Page navigation outside the chat window.
pub trait Navigator {
    fn scroll_to_contact(&self);
}

pub trait Clock {
    type Sleep: Future<Output = ()>;

    fn sleep(&self, ms: u32) -> Self::Sleep;

    /// A sample in `[0, 1)` used to vary the typing delay.
    fn jitter(&self) -> f64;
}

/// Any event sink can act as a surface; the widget feeds these back into its
/// own message loop.
impl<F: Fn(SurfaceEvent)> Surface for F {
    fn set_typing(&self, typing: bool) {
        self(SurfaceEvent::Typing(typing))
    }

    fn append_bot(&self, text: &str) {
        self(SurfaceEvent::Bot(text.to_string()))
    }

    fn append_user(&self, text: &str) {
        self(SurfaceEvent::User(text.to_string()))
    }

    fn append_options(&self, set: OptionSet) {
        self(SurfaceEvent::Options(set))
    }

    fn remove_options(&self, id: OptionSetId) {
        self(SurfaceEvent::RemoveOptions(id))
    }

    fn scroll_to_latest(&self) {
        self(SurfaceEvent::ScrollToLatest)
    }

    fn reveal_input(&self) {
        self(SurfaceEvent::RevealInput)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    pub typing_min_ms: u32,
    pub typing_max_ms: u32,
    pub options_delay_ms: u32,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            typing_min_ms: 1_000,
            typing_max_ms: 5_000,
            options_delay_ms: 600,
        }
    }
}

impl Pacing {
    /// Maps a jitter sample onto `typing_min_ms..=typing_max_ms`.
    pub fn typing_delay(&self, jitter: f64) -> u32 {
        let span = self.typing_max_ms.saturating_sub(self.typing_min_ms) as f64 + 1.0;
        let offset = (jitter.clamp(0.0, 1.0) * span).floor() as u32;
        (self.typing_min_ms + offset).min(self.typing_max_ms)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Active,
}

pub struct ChatEngine<S, N, C> {
    surface: S,
    navigator: N,
    clock: C,
    pacing: Pacing,
    state: Cell<ChatState>,
    live_options: RefCell<Option<OptionSet>>,
    next_set_id: Cell<u32>,
    accepts_text: Cell<bool>,
    // Held for the whole of one bot response so sequences never interleave.
    responding: Mutex<()>,
}

impl<S: Surface, N: Navigator, C: Clock> ChatEngine<S, N, C> {
    pub fn new(surface: S, navigator: N, clock: C, pacing: Pacing) -> Self {
        Self {
            surface,
            navigator,
            clock,
            pacing,
            state: Cell::new(ChatState::Idle),
            live_options: RefCell::new(None),
            next_set_id: Cell::new(0),
            accepts_text: Cell::new(false),
            responding: Mutex::new(()),
        }
    }

    pub fn state(&self) -> ChatState {
        self.state.get()
    }

    pub fn accepts_text(&self) -> bool {
        self.accepts_text.get()
    }

    /// Greets the visitor and offers the topic menu. Returns `false` without
    /// emitting anything if the conversation is already running.
    pub async fn start(&self) -> bool {
        if self.state.get() == ChatState::Active {
            warn!("Chat already started, ignoring");
            return false;
        }
        self.state.set(ChatState::Active);
        info!("Chat started");

        let _turn = self.responding.lock().await;
        self.say_all(GREETING).await;
        self.present(TOPIC_MENU).await;
        true
    }

    pub async fn select_topic(&self, topic: Topic) {
        let _turn = self.responding.lock().await;
        self.play_topic(topic).await;
    }

    pub async fn offer_next_step(&self) {
        let _turn = self.responding.lock().await;
        self.next_step().await;
    }

    /// Handles a click on option `index` of option set `set`. Clicks on a set
    /// that is no longer live are ignored.
    pub async fn choose(&self, set: OptionSetId, index: usize) -> bool {
        let option = {
            let mut live = self.live_options.borrow_mut();
            let option = match live.as_ref() {
                Some(current) if current.id == set => current.options.get(index).cloned(),
                _ => None,
            };
            if option.is_some() {
                live.take();
            }
            option
        };
        let Some(option) = option else {
            warn!("Ignoring click on stale option set {:?}", set);
            return false;
        };

        self.surface.remove_options(set);
        self.surface.append_user(option.label);
        self.surface.scroll_to_latest();
        info!("Visitor chose {:?}", option.choice);

        let _turn = self.responding.lock().await;
        self.run_choice(option.choice).await;
        true
    }

    /// Echoes a typed question and answers it. Only accepted once the visitor
    /// has asked to type.
    pub async fn submit_text(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        if !self.accepts_text.get() {
            warn!("Free text submitted before the input was offered");
            return false;
        }

        self.surface.append_user(text);
        self.surface.scroll_to_latest();

        let intent = classify_free_text(text);
        info!("Free text routed to {:?}", intent);

        let _turn = self.responding.lock().await;
        self.answer(intent).await;
        true
    }

    async fn answer(&self, intent: Intent) {
        match intent {
            Intent::Topic(Topic::Pricing) => {
                self.say_all(PRICING_ACK).await;
                self.next_step().await;
            }
            Intent::Topic(topic) => self.play_topic(topic).await,
            Intent::Greeting => self.say_all(GREETING_ACK).await,
            Intent::Unknown => {
                self.say_all(DEFLECTION).await;
                self.next_step().await;
            }
        }
    }

    async fn run_choice(&self, choice: Choice) {
        match choice {
            Choice::Topic(topic) => self.play_topic(topic).await,
            Choice::BookCall => {
                self.say_all(BOOK_CALL).await;
                self.navigator.scroll_to_contact();
            }
            Choice::AskQuestion => {
                self.say_all(ASK_QUESTION).await;
                self.accepts_text.set(true);
                self.surface.reveal_input();
            }
            Choice::EndChat => self.say_all(FAREWELL).await,
        }
    }

    async fn play_topic(&self, topic: Topic) {
        let script = topic.script();
        self.say_all(script.lines).await;
        if script.then == Continuation::OfferNextStep {
            self.next_step().await;
        }
    }

    async fn next_step(&self) {
        self.say(NEXT_STEP_PROMPT).await;
        self.present(NEXT_STEP_MENU).await;
    }

    async fn say_all(&self, lines: &[&str]) {
        for line in lines {
            self.say(line).await;
        }
    }

    async fn say(&self, line: &str) {
        self.surface.set_typing(true);
        self.surface.scroll_to_latest();
        self.clock
            .sleep(self.pacing.typing_delay(self.clock.jitter()))
            .await;
        self.surface.set_typing(false);
        self.surface.append_bot(line);
        self.surface.scroll_to_latest();
    }

    async fn present(&self, menu: &[(&'static str, Choice)]) {
        self.clock.sleep(self.pacing.options_delay_ms).await;

        // Only one option set may be clickable at a time.
        let stale = self.live_options.borrow_mut().take();
        if let Some(stale) = stale {
            self.surface.remove_options(stale.id);
        }

        let id = OptionSetId(self.next_set_id.get());
        self.next_set_id.set(id.0 + 1);
        let set = OptionSet {
            id,
            options: menu
                .iter()
                .map(|&(label, choice)| ChatOption { label, choice })
                .collect(),
        };
        *self.live_options.borrow_mut() = Some(set.clone());
        self.surface.append_options(set);
        self.surface.scroll_to_latest();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::transcript::{Transcript, Turn};
    use futures::executor::block_on;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<SurfaceEvent>>,
        transcript: RefCell<Transcript>,
    }

    impl Recorder {
        fn push(&self, event: SurfaceEvent) {
            self.transcript.borrow_mut().apply(event.clone());
            self.events.borrow_mut().push(event);
        }

        fn clear_events(&self) {
            self.events.borrow_mut().clear();
        }

        fn content_events(&self) -> Vec<SurfaceEvent> {
            self.events
                .borrow()
                .iter()
                .filter(|e| !matches!(e, SurfaceEvent::ScrollToLatest | SurfaceEvent::Typing(_)))
                .cloned()
                .collect()
        }

        fn live_set(&self) -> OptionSet {
            self.transcript
                .borrow()
                .option_sets()
                .last()
                .cloned()
                .expect("an option set on screen")
        }

        fn bot_lines(&self) -> Vec<String> {
            self.transcript.borrow().bot_lines().map(String::from).collect()
        }
    }

    impl Surface for Recorder {
        fn set_typing(&self, typing: bool) {
            self.push(SurfaceEvent::Typing(typing))
        }
        fn append_bot(&self, text: &str) {
            self.push(SurfaceEvent::Bot(text.to_string()))
        }
        fn append_user(&self, text: &str) {
            self.push(SurfaceEvent::User(text.to_string()))
        }
        fn append_options(&self, set: OptionSet) {
            self.push(SurfaceEvent::Options(set))
        }
        fn remove_options(&self, id: OptionSetId) {
            self.push(SurfaceEvent::RemoveOptions(id))
        }
        fn scroll_to_latest(&self) {
            self.push(SurfaceEvent::ScrollToLatest)
        }
        fn reveal_input(&self) {
            self.push(SurfaceEvent::RevealInput)
        }
    }

    #[derive(Default)]
    struct Nav {
        contact_scrolls: Cell<u32>,
    }

    impl Navigator for Nav {
        fn scroll_to_contact(&self) {
            self.contact_scrolls.set(self.contact_scrolls.get() + 1);
        }
    }

    /// Never waits, but yields once per sleep so concurrent callers get a
    /// chance to interleave.
    #[derive(Default)]
    struct TestClock {
        sleeps: RefCell<Vec<u32>>,
    }

    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    impl Clock for TestClock {
        type Sleep = YieldOnce;

        fn sleep(&self, ms: u32) -> YieldOnce {
            self.sleeps.borrow_mut().push(ms);
            YieldOnce(false)
        }

        fn jitter(&self) -> f64 {
            0.5
        }
    }

    type TestEngine = ChatEngine<Recorder, Nav, TestClock>;

    fn engine() -> TestEngine {
        ChatEngine::new(
            Recorder::default(),
            Nav::default(),
            TestClock::default(),
            Pacing::default(),
        )
    }

    fn labels(set: &OptionSet) -> Vec<&'static str> {
        set.options.iter().map(|o| o.label).collect()
    }

    fn index_of(set: &OptionSet, choice: Choice) -> usize {
        set.options
            .iter()
            .position(|o| o.choice == choice)
            .expect("choice offered")
    }

    fn choose(engine: &TestEngine, choice: Choice) -> bool {
        let set = engine.surface.live_set();
        block_on(engine.choose(set.id, index_of(&set, choice)))
    }

    fn open_free_text(engine: &TestEngine) {
        block_on(engine.start());
        choose(engine, Choice::Topic(Topic::Automation));
        choose(engine, Choice::AskQuestion);
    }

    #[test]
    fn typing_delay_stays_in_range() {
        let pacing = Pacing::default();
        assert_eq!(pacing.typing_delay(0.0), 1_000);
        assert_eq!(pacing.typing_delay(0.5), 3_000);
        assert_eq!(pacing.typing_delay(0.999_999_9), 5_000);
        assert_eq!(pacing.typing_delay(1.0), 5_000);
        assert_eq!(pacing.typing_delay(-3.0), 1_000);
    }

    #[test]
    fn start_greets_then_offers_topics() {
        let engine = engine();
        assert!(block_on(engine.start()));
        assert_eq!(engine.state(), ChatState::Active);

        assert_eq!(engine.surface.bot_lines(), GREETING);
        let set = engine.surface.live_set();
        assert_eq!(labels(&set), TOPIC_MENU.iter().map(|(l, _)| *l).collect::<Vec<_>>());
        assert_eq!(*engine.clock.sleeps.borrow(), vec![3_000, 3_000, 600]);
    }

    #[test]
    fn start_twice_greets_once() {
        let engine = engine();
        assert!(block_on(engine.start()));
        engine.surface.clear_events();

        assert!(!block_on(engine.start()));
        assert!(engine.surface.events.borrow().is_empty());
        assert_eq!(engine.surface.bot_lines(), GREETING);
    }

    #[test]
    fn every_topic_plays_its_script() {
        for topic in Topic::ALL {
            let engine = engine();
            block_on(engine.select_topic(topic));

            let script = topic.script();
            let mut expected: Vec<&str> = script.lines.to_vec();
            match script.then {
                Continuation::OfferNextStep => {
                    expected.push(NEXT_STEP_PROMPT);
                    assert_eq!(
                        labels(&engine.surface.live_set()),
                        NEXT_STEP_MENU.iter().map(|(l, _)| *l).collect::<Vec<_>>()
                    );
                }
                Continuation::EndBranch => {
                    assert_eq!(engine.surface.transcript.borrow().option_sets().count(), 0);
                }
            }
            assert_eq!(engine.surface.bot_lines(), expected, "{:?}", topic);
        }
    }

    #[test]
    fn choosing_removes_the_set_then_echoes() {
        let engine = engine();
        block_on(engine.start());
        let set = engine.surface.live_set();
        engine.surface.clear_events();

        let index = index_of(&set, Choice::Topic(Topic::Browsing));
        assert!(block_on(engine.choose(set.id, index)));

        let events = engine.surface.content_events();
        assert_eq!(events[0], SurfaceEvent::RemoveOptions(set.id));
        assert_eq!(events[1], SurfaceEvent::User("👀 Just browsing".to_string()));
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, SurfaceEvent::RemoveOptions(_) | SurfaceEvent::User(_)))
                .count(),
            2
        );
        assert_eq!(engine.surface.transcript.borrow().option_sets().count(), 0);
    }

    #[test]
    fn option_sets_are_single_use() {
        let engine = engine();
        block_on(engine.start());
        let set = engine.surface.live_set();

        assert!(block_on(engine.choose(set.id, 3)));
        engine.surface.clear_events();
        assert!(!block_on(engine.choose(set.id, 0)));
        assert!(engine.surface.events.borrow().is_empty());
    }

    #[test]
    fn out_of_range_choice_keeps_the_set() {
        let engine = engine();
        block_on(engine.start());
        let set = engine.surface.live_set();

        assert!(!block_on(engine.choose(set.id, 9)));
        assert!(block_on(engine.choose(set.id, 0)));
    }

    #[test]
    fn free_text_needs_an_invitation() {
        let engine = engine();
        block_on(engine.start());
        engine.surface.clear_events();

        assert!(!block_on(engine.submit_text("how much does it cost")));
        assert!(engine.surface.events.borrow().is_empty());
    }

    #[test]
    fn blank_text_is_ignored() {
        let engine = engine();
        open_free_text(&engine);
        engine.surface.clear_events();

        assert!(!block_on(engine.submit_text("   ")));
        assert!(engine.surface.events.borrow().is_empty());
    }

    #[test]
    fn greeting_only_acknowledges() {
        let engine = engine();
        open_free_text(&engine);
        engine.surface.clear_events();

        assert!(block_on(engine.submit_text("hello")));
        assert_eq!(
            engine.surface.content_events(),
            vec![
                SurfaceEvent::User("hello".into()),
                SurfaceEvent::Bot(GREETING_ACK[0].into()),
            ]
        );
    }

    #[test]
    fn unknown_text_deflects_and_offers_next_step() {
        let engine = engine();
        open_free_text(&engine);
        engine.surface.clear_events();

        block_on(engine.submit_text("asdfghjkl"));
        let events = engine.surface.content_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], SurfaceEvent::User("asdfghjkl".into()));
        assert_eq!(events[1], SurfaceEvent::Bot(DEFLECTION[0].into()));
        assert_eq!(events[2], SurfaceEvent::Bot(NEXT_STEP_PROMPT.into()));
        assert!(matches!(events[3], SurfaceEvent::Options(_)));
    }

    #[test]
    fn new_menu_retires_the_previous_one() {
        let engine = engine();
        open_free_text(&engine);
        block_on(engine.submit_text("asdfghjkl"));
        let first = engine.surface.live_set();
        engine.surface.clear_events();

        block_on(engine.submit_text("zzz"));
        let events = engine.surface.content_events();
        assert_eq!(events[3], SurfaceEvent::RemoveOptions(first.id));
        assert!(matches!(&events[4], SurfaceEvent::Options(set) if set.id != first.id));
        assert_eq!(engine.surface.transcript.borrow().option_sets().count(), 1);

        // The retired menu no longer answers clicks.
        assert!(!block_on(engine.choose(first.id, 0)));
    }

    #[test]
    fn typed_topic_routes_into_its_script() {
        let engine = engine();
        open_free_text(&engine);
        let lines_before = engine.surface.bot_lines().len();

        block_on(engine.submit_text("Can you help with a security audit?"));
        let lines = engine.surface.bot_lines();
        let strategy = Topic::Strategy.script().lines;
        assert_eq!(&lines[lines_before..lines_before + strategy.len()], strategy);
        assert_eq!(lines.last().map(String::as_str), Some(NEXT_STEP_PROMPT));
    }

    #[test]
    fn book_call_scrolls_to_contact_after_replying() {
        let engine = engine();
        block_on(engine.select_topic(Topic::OnPrem));
        assert!(choose(&engine, Choice::BookCall));

        assert_eq!(engine.navigator.contact_scrolls.get(), 1);
        let lines = engine.surface.bot_lines();
        assert_eq!(&lines[lines.len() - 2..], BOOK_CALL);
        assert!(!engine.accepts_text());
    }

    #[test]
    fn ending_says_goodbye_without_options() {
        let engine = engine();
        block_on(engine.offer_next_step());
        choose(&engine, Choice::EndChat);

        assert_eq!(engine.surface.bot_lines().last().map(String::as_str), Some(FAREWELL[0]));
        assert_eq!(engine.surface.transcript.borrow().option_sets().count(), 0);
    }

    #[test]
    fn concurrent_answers_do_not_interleave() {
        let engine = engine();
        open_free_text(&engine);
        engine.surface.clear_events();

        block_on(async {
            futures::join!(engine.submit_text("hey"), engine.submit_text("qwerty"));
        });

        let bots: Vec<SurfaceEvent> = engine
            .surface
            .content_events()
            .into_iter()
            .filter(|e| matches!(e, SurfaceEvent::Bot(_)))
            .collect();
        assert_eq!(
            bots,
            vec![
                SurfaceEvent::Bot(GREETING_ACK[0].into()),
                SurfaceEvent::Bot(DEFLECTION[0].into()),
                SurfaceEvent::Bot(NEXT_STEP_PROMPT.into()),
            ]
        );
    }

    #[test]
    fn closure_surface_forwards_events() {
        let seen = RefCell::new(Vec::new());
        let sink = |event: SurfaceEvent| seen.borrow_mut().push(event);
        sink.append_bot("hi");
        sink.reveal_input();
        assert_eq!(
            *seen.borrow(),
            vec![SurfaceEvent::Bot("hi".into()), SurfaceEvent::RevealInput]
        );
    }

    #[test]
    fn onprem_then_typed_pricing_end_to_end() {
        let engine = engine();
        block_on(engine.start());
        {
            let transcript = engine.surface.transcript.borrow();
            assert_eq!(transcript.bot_lines().count(), 2);
            assert_eq!(transcript.option_sets().last().map(|s| s.options.len()), Some(4));
        }

        choose(&engine, Choice::Topic(Topic::OnPrem));
        let lines = engine.surface.bot_lines();
        assert_eq!(&lines[2..4], Topic::OnPrem.script().lines);
        assert_eq!(lines[4], NEXT_STEP_PROMPT);
        assert_eq!(engine.surface.live_set().options.len(), 3);

        assert!(!engine.surface.transcript.borrow().input_visible);
        choose(&engine, Choice::AskQuestion);
        assert!(engine.surface.transcript.borrow().input_visible);
        assert!(engine.accepts_text());

        block_on(engine.submit_text("pricing"));
        let lines = engine.surface.bot_lines();
        assert_eq!(&lines[lines.len() - 3..lines.len() - 1], PRICING_ACK);
        assert_eq!(lines.last().map(String::as_str), Some(NEXT_STEP_PROMPT));

        let transcript = engine.surface.transcript.borrow();
        assert_eq!(transcript.option_sets().count(), 1);
        assert!(matches!(transcript.turns.last(), Some(Turn::Options(set)) if set.options.len() == 3));
    }
}
