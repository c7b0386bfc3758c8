//! Script session: parses command lines and drives a mounted page

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use reverie_model::{Acceleration, ModelError, MotionSample, VideoId};
use reverie_player::domains::carousel::{
    CarouselMessage, Direction, InfiniteCarousel, MotionOutcome, MotionState, Settle,
};
use reverie_player::domains::media::MediaMessage;
use reverie_player::domains::surprise::{ClickTarget, SurpriseMessage};
use reverie_player::{Page, PageMessage, PageOutcome, PageSpec};
use thiserror::Error;

use crate::host::{SimulatedBackend, SimulatedViewport};

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    Arguments {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{command}`: {value:?} is not a number")]
    Number { command: &'static str, value: String },
    #[error(transparent)]
    VideoId(#[from] ModelError),
}

/// One line of a session script.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Prev,
    Step(Direction),
    Search(String),
    Settle,
    ApiReady,
    PlayerReady(VideoId),
    PlayerError(VideoId, i32),
    Play(VideoId),
    Pause(VideoId),
    Open,
    Close,
    ClickBackdrop,
    ClickContent,
    ClickMessage,
    Shake(Acceleration),
    Status,
}

impl Command {
    /// Parse a script line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, rest) = match s.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (s, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        let no_args = |command: &'static str, parsed: Command| {
            if args.is_empty() {
                Ok(parsed)
            } else {
                Err(CommandError::Arguments {
                    command,
                    expected: "no arguments",
                })
            }
        };
        let video = |command: &'static str| -> Result<VideoId, CommandError> {
            match args.as_slice() {
                [id] => Ok(VideoId::new(id)?),
                _ => Err(CommandError::Arguments {
                    command,
                    expected: "a video id",
                }),
            }
        };

        match name {
            "next" => no_args("next", Self::Next),
            "prev" => no_args("prev", Self::Prev),
            "step" => {
                let expected = CommandError::Arguments {
                    command: "step",
                    expected: "a signed step: +1 or -1",
                };
                let [raw] = args.as_slice() else {
                    return Err(expected);
                };
                let step: i32 = raw.parse().map_err(|_| CommandError::Number {
                    command: "step",
                    value: (*raw).to_string(),
                })?;
                if step.abs() != 1 {
                    return Err(expected);
                }
                Direction::from_sign(step).map(Self::Step).ok_or(expected)
            }
            // Search text is the raw remainder; the controller trims it.
            "search" => Ok(Self::Search(rest.to_string())),
            "settle" => no_args("settle", Self::Settle),
            "api-ready" => no_args("api-ready", Self::ApiReady),
            "player-ready" => Ok(Self::PlayerReady(video("player-ready")?)),
            "player-error" => match args.as_slice() {
                [id, code] => {
                    let code = code.parse().map_err(|_| CommandError::Number {
                        command: "player-error",
                        value: (*code).to_string(),
                    })?;
                    Ok(Self::PlayerError(VideoId::new(id)?, code))
                }
                _ => Err(CommandError::Arguments {
                    command: "player-error",
                    expected: "a video id and an error code",
                }),
            },
            "play" => Ok(Self::Play(video("play")?)),
            "pause" => Ok(Self::Pause(video("pause")?)),
            "open" => no_args("open", Self::Open),
            "close" => no_args("close", Self::Close),
            "click-backdrop" => no_args("click-backdrop", Self::ClickBackdrop),
            "click-content" => no_args("click-content", Self::ClickContent),
            "click-message" => no_args("click-message", Self::ClickMessage),
            "shake" => {
                let [x, y, z] = args.as_slice() else {
                    return Err(CommandError::Arguments {
                        command: "shake",
                        expected: "three accelerations: x y z",
                    });
                };
                let axis = |value: &str| {
                    value.parse::<f64>().map_err(|_| CommandError::Number {
                        command: "shake",
                        value: value.to_string(),
                    })
                };
                Ok(Self::Shake(Acceleration::new(axis(*x)?, axis(*y)?, axis(*z)?)))
            }
            "status" => no_args("status", Self::Status),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Totals for a finished script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Session {
    page: Page<SimulatedViewport, SimulatedBackend>,
    manual_settle: bool,
    /// Frames already echoed to the transcript.
    echoed: usize,
}

impl Session {
    pub fn new(
        spec: PageSpec,
        viewport: SimulatedViewport,
        backend: SimulatedBackend,
        manual_settle: bool,
    ) -> Self {
        let page = Page::mount(spec, viewport, backend);
        Self {
            page,
            manual_settle,
            echoed: 0,
        }
    }

    pub fn page(&self) -> &Page<SimulatedViewport, SimulatedBackend> {
        &self.page
    }

    /// Lines describing the page right after mount.
    pub fn mount_report(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        self.echo_frames(&mut lines);
        match self.page.carousel() {
            Some(carousel) => lines.push(format!(
                "mounted carousel: {} items, {} clones per side, slot {}",
                carousel.len(),
                carousel.clone_count(),
                carousel.position()
            )),
            None => lines.push("carousel inactive".to_string()),
        }
        lines
    }

    /// Execute one command and return its transcript lines.
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        let mut lines = Vec::new();
        match command {
            Command::Settle => {
                self.page.host_mut().skip_to_end();
                let outcome = self.page.update(CarouselMessage::TransitionFinished);
                self.describe(&outcome, &mut lines);
            }
            Command::ApiReady => {
                self.page.backend_mut().mark_loaded();
                let outcome = self.page.update(MediaMessage::ApiReady);
                self.describe(&outcome, &mut lines);
            }
            Command::Status => self.status(&mut lines),
            other => {
                if let Some(message) = Self::message_for(other) {
                    let outcome = self.page.update(message);
                    self.describe(&outcome, &mut lines);
                }
            }
        }
        if !self.manual_settle {
            self.settle_running(&mut lines);
        }
        self.echo_notices(&mut lines);
        lines
    }

    /// Run a whole script, writing the transcript to `out`. Bad lines are
    /// reported and skipped.
    pub fn run_script<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<RunSummary>
    where
        R: BufRead,
        W: Write,
    {
        let mut summary = RunSummary::default();
        for line in self.mount_report() {
            writeln!(out, "{line}")?;
        }
        for (number, line) in input.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read script line {}", number + 1))?;
            match Command::parse_line(&line) {
                Ok(None) => {}
                Ok(Some(command)) => {
                    writeln!(out, "> {}", line.trim())?;
                    for entry in self.execute(command) {
                        writeln!(out, "  {entry}")?;
                    }
                    summary.executed += 1;
                }
                Err(err) => {
                    log::warn!("Skipping script line {}: {}", number + 1, err);
                    writeln!(out, "! line {}: {}", number + 1, err)?;
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    fn message_for(command: Command) -> Option<PageMessage> {
        let message = match command {
            Command::Next => CarouselMessage::Next.into(),
            Command::Prev => CarouselMessage::Prev.into(),
            Command::Step(direction) => CarouselMessage::Step(direction).into(),
            Command::Search(text) => CarouselMessage::Search(text).into(),
            Command::Settle => CarouselMessage::TransitionFinished.into(),
            Command::ApiReady => MediaMessage::ApiReady.into(),
            Command::PlayerReady(id) => MediaMessage::PlayerReady(id).into(),
            Command::PlayerError(id, code) => MediaMessage::PlayerError { id, code }.into(),
            Command::Play(id) => MediaMessage::Play(id).into(),
            Command::Pause(id) => MediaMessage::Pause(id).into(),
            Command::Open => SurpriseMessage::Open.into(),
            Command::Close => SurpriseMessage::Close.into(),
            Command::ClickBackdrop => SurpriseMessage::OverlayClicked(ClickTarget::Backdrop).into(),
            Command::ClickContent => SurpriseMessage::OverlayClicked(ClickTarget::Content).into(),
            Command::ClickMessage => SurpriseMessage::MessageClicked.into(),
            Command::Shake(acceleration) => {
                SurpriseMessage::DeviceMotion(MotionSample::with_acceleration(acceleration)).into()
            }
            Command::Status => return None,
        };
        Some(message)
    }

    /// Play out and acknowledge transitions until the carousel is idle.
    /// Queued requests resume on settle, so this can take several rounds.
    fn settle_running(&mut self, lines: &mut Vec<String>) {
        while self.page.carousel().is_some_and(InfiniteCarousel::is_transitioning) {
            if let Some(ticks) = self.page.host_mut().play_out() {
                log::debug!("Transition played out in {} ticks", ticks);
            }
            let outcome = self.page.update(CarouselMessage::TransitionFinished);
            self.describe(&outcome, lines);
        }
    }

    fn describe(&mut self, outcome: &PageOutcome, lines: &mut Vec<String>) {
        self.echo_frames(lines);
        match outcome {
            PageOutcome::Motion(motion) => lines.push(describe_motion(*motion)),
            PageOutcome::Settle(Settle::Stray) => {
                lines.push("no transition in flight".to_string())
            }
            PageOutcome::Settle(Settle::Settled {
                position,
                rebased,
                resumed,
            }) => {
                let item = self
                    .page
                    .carousel()
                    .and_then(|carousel| {
                        let index = carousel.display_track().original_at(*position)?;
                        carousel.items().get(index)
                    })
                    .map(|item| item.label.as_str())
                    .unwrap_or_default();
                let rebase = if *rebased { ", rebased" } else { "" };
                lines.push(format!("settled at slot {position} {item:?}{rebase}"));
                if let Some(motion) = resumed {
                    lines.push(format!("resumed: {}", describe_motion(*motion)));
                }
            }
            PageOutcome::PlayersCreated(count) => {
                lines.push(format!("api ready: {count} players created"))
            }
            PageOutcome::Playback { id, .. } => {
                let state = if self.page.backend().is_playing(id) {
                    "playing"
                } else {
                    "not playing"
                };
                lines.push(format!("video {id}: {state}"));
            }
            PageOutcome::Surprise { open, revealed } => lines.push(format!(
                "dialog {}, message {}",
                if *open { "open" } else { "closed" },
                if *revealed { "revealed" } else { "blurred" }
            )),
            PageOutcome::Logged => lines.push("logged".to_string()),
            PageOutcome::Inactive(feature) => lines.push(format!("{feature} inactive")),
        }
    }

    fn status(&self, lines: &mut Vec<String>) {
        match self.page.carousel() {
            Some(carousel) => {
                let item = carousel
                    .current_item()
                    .map(|item| item.label.as_str())
                    .unwrap_or_default();
                let motion = match carousel.motion() {
                    MotionState::Idle => "idle".to_string(),
                    MotionState::Transitioning { target } => {
                        format!("moving to {target}")
                    }
                };
                lines.push(format!(
                    "carousel: slot {} {:?}, offset {}px, {}, {} queued",
                    carousel.position(),
                    item,
                    carousel.offset(),
                    motion,
                    carousel.pending_len()
                ));
            }
            None => lines.push("carousel: inactive".to_string()),
        }

        let media = self.page.media();
        lines.push(format!(
            "media: api {}, {}/{} players",
            if media.is_api_ready() { "ready" } else { "pending" },
            media.registered_count(),
            media.tracks().len()
        ));

        match self.page.surprise() {
            Some(dialog) => lines.push(format!(
                "surprise: {}, message {}, hint {}, shakes {}",
                if dialog.is_open() { "open" } else { "closed" },
                if dialog.is_revealed() { "revealed" } else { "blurred" },
                if dialog.hint_visible() { "shown" } else { "hidden" },
                dialog.shake_count()
            )),
            None => lines.push("surprise: inactive".to_string()),
        }
    }

    fn echo_frames(&mut self, lines: &mut Vec<String>) {
        let frames = self.page.host().frames();
        for frame in &frames[self.echoed..] {
            lines.push(format!("render {frame}"));
        }
        self.echoed = frames.len();
    }

    fn echo_notices(&mut self, lines: &mut Vec<String>) {
        for notice in self.page.take_notices() {
            lines.push(format!("notice: {notice}"));
        }
    }
}

fn describe_motion(outcome: MotionOutcome) -> String {
    match outcome {
        MotionOutcome::Started { target } => format!("moving to slot {target}"),
        MotionOutcome::Queued => "queued behind running transition".to_string(),
        MotionOutcome::Ignored => "ignored: transition in flight".to_string(),
        MotionOutcome::Unchanged => "already there".to_string(),
        MotionOutcome::Rejected => "rejected".to_string(),
    }
}
