use std::time::Duration;

use query_logging::query_info;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use symptom_core::{update, FormState, Msg};
use symptom_engine::ClientSettings;

use super::effects::EffectRunner;
use super::ui;
use super::ui::keys::KeyAction;

/// Poll interval for terminal input; also bounds how late an engine result is noticed.
const TICK: Duration = Duration::from_millis(75);

pub fn run_app(settings: ClientSettings) -> anyhow::Result<()> {
    let runner = EffectRunner::new(settings)?;

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &runner);
    ratatui::restore();

    query_info!("Symptom checker closed");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, runner: &EffectRunner) -> anyhow::Result<()> {
    let mut state = FormState::new();
    let mut needs_draw = true;

    loop {
        if needs_draw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view))?;
            needs_draw = false;
        }

        let mut inbox = runner.drain();
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match ui::keys::map_key(key, &state.view()) {
                        KeyAction::Quit => return Ok(()),
                        KeyAction::Dispatch(msg) => inbox.push(msg),
                        KeyAction::Ignore => {}
                    }
                }
                Event::Resize(..) => needs_draw = true,
                _ => {}
            }
        }
        inbox.push(Msg::Tick);

        for msg in inbox {
            let (next, effects) = update(state, msg);
            state = next;
            runner.enqueue(effects);
        }
        needs_draw |= state.consume_dirty();
    }
}
