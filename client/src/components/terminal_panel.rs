//! Terminal widget: transcript view plus the command input line.

use leptos::prelude::*;

use crate::state::terminal::TerminalState;
use crate::term::{self, CommandOutput};

const PROMPT: &str = "guest@site:~$";

/// Terminal panel driving the fixed command interpreter.
#[component]
pub fn TerminalPanel() -> impl IntoView {
    let term_state = expect_context::<RwSignal<TerminalState>>();
    let input = RwSignal::new(String::new());

    let run_line = move || {
        let line = input.get_untracked();
        if line.trim().is_empty() {
            return;
        }
        match term::run(&line) {
            CommandOutput::Text(output) => term_state.update(|t| t.push(line.clone(), output)),
            CommandOutput::Clear => term_state.update(TerminalState::clear),
            CommandOutput::ToggleMatrix => term_state.update(|t| {
                t.matrix_mode = !t.matrix_mode;
                let status = if t.matrix_mode { "on" } else { "off" };
                t.push(line.clone(), format!("matrix mode {status}"));
            }),
        }
        input.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            run_line();
        }
    };

    view! {
        <div class="terminal" class:terminal--matrix=move || term_state.get().matrix_mode>
            <div class="terminal__scroll">
                {move || {
                    term_state
                        .get()
                        .entries
                        .iter()
                        .map(|entry| {
                            let input_line = entry.input.clone();
                            let output = entry.output.clone();
                            view! {
                                <div class="terminal__entry">
                                    <div class="terminal__echo">
                                        <span class="terminal__prompt">{PROMPT}</span>
                                        " "
                                        {input_line}
                                    </div>
                                    <pre class="terminal__output">{output}</pre>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <div class="terminal__input-row">
                <span class="terminal__prompt">{PROMPT}</span>
                <input
                    class="terminal__input"
                    type="text"
                    spellcheck="false"
                    autocomplete="off"
                    placeholder="type help"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
}
