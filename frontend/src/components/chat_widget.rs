use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::chat::{ChatEngine, ChatState, Clock, OptionSetId, SurfaceEvent, Transcript, Turn};
use crate::config;
use crate::scroll::PageNavigator;

pub struct BrowserClock;

impl Clock for BrowserClock {
    type Sleep = TimeoutFuture;

    fn sleep(&self, ms: u32) -> TimeoutFuture {
        TimeoutFuture::new(ms)
    }

    fn jitter(&self) -> f64 {
        js_sys::Math::random()
    }
}

type Engine = ChatEngine<Box<dyn Fn(SurfaceEvent)>, PageNavigator, BrowserClock>;

pub enum ChatMsg {
    Open,
    Close,
    Surface(SurfaceEvent),
    Choose(OptionSetId, usize),
    SetDraft(String),
    Send,
}

pub struct ChatWidget {
    open: bool,
    draft: String,
    transcript: Transcript,
    engine: Rc<Engine>,
    body_ref: NodeRef,
    input_ref: NodeRef,
}

impl Component for ChatWidget {
    type Message = ChatMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let events = ctx.link().callback(ChatMsg::Surface);
        let surface: Box<dyn Fn(SurfaceEvent)> = Box::new(move |event| events.emit(event));

        Self {
            open: false,
            draft: String::new(),
            transcript: Transcript::default(),
            engine: Rc::new(ChatEngine::new(
                surface,
                PageNavigator,
                BrowserClock,
                config::chat_pacing(),
            )),
            body_ref: NodeRef::default(),
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatMsg::Open => {
                self.open = true;
                if self.engine.state() == ChatState::Idle {
                    let engine = self.engine.clone();
                    spawn_local(async move {
                        engine.start().await;
                    });
                }
                true
            }
            ChatMsg::Close => {
                // Pending replies keep rendering while the window is hidden.
                info!("Chat window closed");
                self.open = false;
                true
            }
            ChatMsg::Surface(event) => {
                self.transcript.apply(event);
                true
            }
            ChatMsg::Choose(set, index) => {
                let engine = self.engine.clone();
                spawn_local(async move {
                    engine.choose(set, index).await;
                });
                false
            }
            ChatMsg::SetDraft(text) => {
                self.draft = text;
                true
            }
            ChatMsg::Send => {
                if self.draft.trim().is_empty() {
                    return false;
                }
                let text = std::mem::take(&mut self.draft);
                let engine = self.engine.clone();
                spawn_local(async move {
                    engine.submit_text(&text).await;
                });
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if std::mem::take(&mut self.transcript.scroll_pending) {
            if let Some(body) = self.body_ref.cast::<HtmlElement>() {
                body.set_scroll_top(body.scroll_height());
            }
        }
        if std::mem::take(&mut self.transcript.focus_pending) {
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let input_style = if self.transcript.input_visible {
            "display: flex;"
        } else {
            "display: none;"
        };

        html! {
            <>
                <button
                    class={classes!("chatbot-toggle", self.open.then(|| "hidden"))}
                    onclick={link.callback(|_| ChatMsg::Open)}
                    aria-label="Open chat"
                >
                    { "💬" }
                </button>
                <div class={classes!("chatbot-window", self.open.then(|| "open"))}>
                    <div class="chatbot-header">
                        <span class="chatbot-title">{ "CTX Foundry" }</span>
                        <button
                            class="chatbot-close"
                            onclick={link.callback(|_| ChatMsg::Close)}
                            aria-label="Close chat"
                        >
                            { "✕" }
                        </button>
                    </div>
                    <div class="chatbot-body" ref={self.body_ref.clone()}>
                        { for self.transcript.turns.iter().map(|turn| self.render_turn(ctx, turn)) }
                        if self.transcript.typing {
                            <div class="chat-message bot typing">
                                <span class="typing-text">{ "Typing" }</span>
                                <span class="typing-dots">
                                    <span class="typing-dot"></span>
                                    <span class="typing-dot"></span>
                                    <span class="typing-dot"></span>
                                </span>
                            </div>
                        }
                    </div>
                    <div class="chatbot-input-area" style={input_style}>
                        <input
                            type="text"
                            placeholder="Type your question..."
                            ref={self.input_ref.clone()}
                            value={self.draft.clone()}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                ChatMsg::SetDraft(input.value())
                            })}
                            onkeydown={link.batch_callback(|e: KeyboardEvent| {
                                (e.key() == "Enter").then(|| ChatMsg::Send)
                            })}
                        />
                        <button class="chatbot-send" onclick={link.callback(|_| ChatMsg::Send)}>
                            { "Send" }
                        </button>
                    </div>
                </div>
                <style>
                    {r#"
                    .chatbot-toggle {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        width: 56px;
                        height: 56px;
                        border-radius: 50%;
                        border: none;
                        background: #ff6b2c;
                        color: #fff;
                        font-size: 24px;
                        cursor: pointer;
                        z-index: 1000;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                    }
                    .chatbot-toggle.hidden {
                        display: none;
                    }
                    .chatbot-window {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        width: 360px;
                        max-height: 540px;
                        display: none;
                        flex-direction: column;
                        background: #141414;
                        border: 1px solid rgba(255, 107, 44, 0.2);
                        border-radius: 16px;
                        overflow: hidden;
                        z-index: 1000;
                    }
                    .chatbot-window.open {
                        display: flex;
                    }
                    .chatbot-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 14px 18px;
                        background: #1d1d1d;
                        color: #fff;
                    }
                    .chatbot-close {
                        background: none;
                        border: none;
                        color: #aaa;
                        cursor: pointer;
                    }
                    .chatbot-body {
                        flex: 1;
                        overflow-y: auto;
                        padding: 16px;
                        display: flex;
                        flex-direction: column;
                        gap: 10px;
                    }
                    .chat-message {
                        max-width: 85%;
                        padding: 10px 14px;
                        border-radius: 12px;
                        font-size: 14px;
                        line-height: 1.45;
                        white-space: pre-line;
                    }
                    .chat-message.bot {
                        align-self: flex-start;
                        background: #232323;
                        color: #eee;
                    }
                    .chat-message.user {
                        align-self: flex-end;
                        background: #ff6b2c;
                        color: #fff;
                    }
                    .typing-dots {
                        display: inline-flex;
                        gap: 3px;
                        margin-left: 6px;
                    }
                    .typing-dot {
                        width: 5px;
                        height: 5px;
                        border-radius: 50%;
                        background: #aaa;
                        animation: typingBlink 1.2s infinite ease-in-out;
                    }
                    .typing-dot:nth-child(2) { animation-delay: 0.2s; }
                    .typing-dot:nth-child(3) { animation-delay: 0.4s; }
                    @keyframes typingBlink {
                        0%, 80%, 100% { opacity: 0.2; }
                        40% { opacity: 1; }
                    }
                    .chat-options {
                        display: flex;
                        flex-direction: column;
                        gap: 6px;
                    }
                    .chat-option-btn {
                        text-align: left;
                        padding: 9px 12px;
                        border-radius: 10px;
                        border: 1px solid rgba(255, 107, 44, 0.4);
                        background: transparent;
                        color: #ff6b2c;
                        cursor: pointer;
                    }
                    .chat-option-btn:hover {
                        background: rgba(255, 107, 44, 0.1);
                    }
                    .chatbot-input-area {
                        gap: 8px;
                        padding: 12px;
                        border-top: 1px solid #2a2a2a;
                    }
                    .chatbot-input-area input {
                        flex: 1;
                        padding: 8px 10px;
                        border-radius: 8px;
                        border: 1px solid #333;
                        background: #1b1b1b;
                        color: #fff;
                    }
                    .chatbot-send {
                        padding: 8px 14px;
                        border-radius: 8px;
                        border: none;
                        background: #ff6b2c;
                        color: #fff;
                        cursor: pointer;
                    }
                    @media (max-width: 480px) {
                        .chatbot-window {
                            width: calc(100% - 24px);
                            right: 12px;
                            bottom: 12px;
                        }
                    }
                    "#}
                </style>
            </>
        }
    }
}

impl ChatWidget {
    fn render_turn(&self, ctx: &Context<Self>, turn: &Turn) -> Html {
        match turn {
            Turn::Bot(text) => html! { <div class="chat-message bot">{ text }</div> },
            Turn::User(text) => html! { <div class="chat-message user">{ text }</div> },
            Turn::Options(set) => {
                let set_id = set.id;
                html! {
                    <div class="chat-options">
                        { for set.options.iter().enumerate().map(|(index, option)| html! {
                            <button
                                class="chat-option-btn"
                                onclick={ctx.link().callback(move |_| ChatMsg::Choose(set_id, index))}
                            >
                                { option.label }
                            </button>
                        }) }
                    </div>
                }
            }
        }
    }
}
