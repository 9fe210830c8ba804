#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use std::time::Duration;
use std::time::Instant;

use ratatui::prelude::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::actions::help_text;
use super::BubbleEntry;
use super::BubbleList;
use super::History;
use super::RecommendationSegment;
use super::ResultPresenter;
use super::ResultView;
use super::Scroll;
use super::SessionController;
use crate::domain::models::Action;
use crate::domain::models::AnalyzeResponse;
use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::HistoryRecord;
use crate::domain::models::SessionPhase;
use crate::domain::models::SlashCommand;
use crate::domain::models::FINAL_QUESTION_ID;

const BANNER_TTL: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Chat,
    HistoryList,
    HistoryDetail(i64),
}

/// One-line status notice shown under the transcript, dropped after a few
/// seconds.
pub struct StatusBanner {
    pub text: String,
    pub error: bool,
    expires_at: Instant,
}

impl StatusBanner {
    fn info(text: String) -> StatusBanner {
        return StatusBanner {
            text,
            error: false,
            expires_at: Instant::now() + BANNER_TTL,
        };
    }

    fn error(text: String) -> StatusBanner {
        return StatusBanner {
            text,
            error: true,
            expires_at: Instant::now() + BANNER_TTL,
        };
    }
}

/// What the UI loop should do with a submitted line of input.
pub enum InputOutcome {
    Quit,
    Dispatch(Action),
    Consumed,
}

pub struct AppState {
    pub controller: SessionController,
    pub history: History,
    pub history_loading: bool,
    pub mode: ViewMode,
    pub pending_delete: Option<i64>,
    pub banner: Option<StatusBanner>,
    pub bubble_list: BubbleList,
    pub scroll: Scroll,
    pub last_known_width: u16,
    pub last_known_height: u16,
    notices: Vec<String>,
    analysis: Option<AnalyzeResponse>,
}

impl Default for AppState {
    fn default() -> AppState {
        return AppState {
            controller: SessionController::default(),
            history: History::default(),
            history_loading: false,
            mode: ViewMode::Chat,
            pending_delete: None,
            banner: None,
            bubble_list: BubbleList::default(),
            scroll: Scroll::default(),
            last_known_width: 0,
            last_known_height: 0,
            notices: vec![],
            analysis: None,
        };
    }
}

impl AppState {
    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    pub fn handle_input(&mut self, input: &str) -> InputOutcome {
        if let Some(command) = SlashCommand::parse(input) {
            return self.handle_command(&command);
        }

        if let Some(action) = self.controller.submit_answer(input) {
            self.sync_dependants();
            self.scroll.last();
            return InputOutcome::Dispatch(action);
        }

        if self.controller.phase() == SessionPhase::AwaitingAnswer {
            self.banner = Some(StatusBanner::error(
                "Answers need at least 5 words, without numbers or special characters".to_string(),
            ));
        }

        return InputOutcome::Consumed;
    }

    fn handle_command(&mut self, command: &SlashCommand) -> InputOutcome {
        if command.is_quit() {
            return InputOutcome::Quit;
        }

        if command.is_new_session() {
            self.mode = ViewMode::Chat;
            self.notices.clear();
            self.analysis = None;
            if let Some(action) = self.controller.start_session() {
                self.sync_dependants();
                return InputOutcome::Dispatch(action);
            }

            self.banner = Some(StatusBanner::info(
                "Hold on, still waiting on the last request".to_string(),
            ));
            return InputOutcome::Consumed;
        }

        if command.is_history() {
            self.mode = ViewMode::HistoryList;
            self.history_loading = true;
            self.sync_dependants();
            return InputOutcome::Dispatch(Action::FetchHistory());
        }

        if command.is_chat() {
            self.mode = ViewMode::Chat;
            self.sync_dependants();
            return InputOutcome::Consumed;
        }

        if command.is_view() {
            match self.record_id_arg(command) {
                Some(id) => {
                    self.mode = ViewMode::HistoryDetail(id);
                    self.sync_dependants();
                    self.scroll.last();
                }
                None => {
                    self.banner = Some(StatusBanner::error(
                        "Usage: /view SESSION_ID, with an id from /history".to_string(),
                    ));
                }
            }
            return InputOutcome::Consumed;
        }

        if command.is_analyze() {
            let message = command.args.join(" ").trim().to_string();
            if message.is_empty() {
                self.banner = Some(StatusBanner::error(
                    "Usage: /analyze MESSAGE, in your own words".to_string(),
                ));
                return InputOutcome::Consumed;
            }

            self.mode = ViewMode::Chat;
            self.banner = Some(StatusBanner::info("Analyzing your message...".to_string()));
            return InputOutcome::Dispatch(Action::Analyze(message));
        }

        if command.is_delete() {
            match self.record_id_arg(command) {
                Some(id) => {
                    self.pending_delete = Some(id);
                    self.banner = Some(StatusBanner::info(format!(
                        "Run /confirm to permanently delete session {id}"
                    )));
                }
                None => {
                    self.banner = Some(StatusBanner::error(
                        "Usage: /delete SESSION_ID, with an id from /history".to_string(),
                    ));
                }
            }
            return InputOutcome::Consumed;
        }

        if command.is_confirm() {
            if let Some(id) = self.pending_delete.take() {
                return InputOutcome::Dispatch(Action::DeleteRecord(id));
            }

            self.banner = Some(StatusBanner::error(
                "Nothing pending. Run /delete SESSION_ID first".to_string(),
            ));
            return InputOutcome::Consumed;
        }

        if command.is_help() {
            self.notices.push(help_text());
            self.sync_dependants();
            self.scroll.last();
        }

        return InputOutcome::Consumed;
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::SessionStarted(generation, response) => {
                self.controller.on_session_started(generation, response);
            }
            Event::SessionStartFailed(generation, error) => {
                self.controller.on_start_failed(generation, error);
            }
            Event::AnswerAccepted(generation, response) => {
                self.controller.on_answer_accepted(generation, response);
            }
            Event::AnswerFailed(generation, error) => {
                self.controller.on_answer_failed(generation, error);
            }
            Event::HistoryLoaded(records) => {
                self.history = History { records };
                self.history_loading = false;
            }
            Event::HistoryFailed(error) => {
                self.history_loading = false;
                self.banner = Some(StatusBanner::error(error));
            }
            Event::RecordDeleted(id) => {
                self.history.remove(id);
                if self.mode == ViewMode::HistoryDetail(id) {
                    self.mode = ViewMode::HistoryList;
                }
                self.banner = Some(StatusBanner::info(format!("Session {id} deleted")));
            }
            Event::RecordDeleteFailed(id, error) => {
                self.banner = Some(StatusBanner::error(format!(
                    "Could not delete session {id}: {error}"
                )));
            }
            Event::AnalysisReady(response) => {
                self.analysis = Some(response);
                self.banner = None;
            }
            Event::AnalysisFailed(error) => {
                self.banner = Some(StatusBanner::error(error));
            }
            _ => (),
        }

        self.sync_dependants();
        self.scroll.last();
    }

    /// Called on the UI tick to expire the banner.
    pub fn tick(&mut self) {
        if let Some(banner) = &self.banner {
            if Instant::now() >= banner.expires_at {
                self.banner = None;
            }
        }
    }

    /// Text for the one-line status area. The banner wins while it lives,
    /// then the assessment progress.
    pub fn status_text(&self) -> (String, bool) {
        if let Some(banner) = &self.banner {
            return (banner.text.to_string(), banner.error);
        }

        match self.mode {
            ViewMode::Chat => match self.controller.phase() {
                SessionPhase::AwaitingAnswer | SessionPhase::Submitting => {
                    if let Some(question) = self.controller.current_question() {
                        return (
                            format!("Question {} of {FINAL_QUESTION_ID}", question.id),
                            false,
                        );
                    }
                    return ("".to_string(), false);
                }
                SessionPhase::Complete => {
                    return ("Assessment complete. /new to go again, /history for past results".to_string(), false);
                }
                _ => return ("".to_string(), false),
            },
            ViewMode::HistoryList => {
                return ("/view ID for details, /delete ID to remove, /chat to go back".to_string(), false);
            }
            ViewMode::HistoryDetail(_) => {
                return ("/history to go back to the list".to_string(), false);
            }
        }
    }

    fn record_id_arg(&self, command: &SlashCommand) -> Option<i64> {
        let id = command.args.first()?.parse::<i64>().ok()?;
        if self.history.get(id).is_none() {
            return None;
        }

        return Some(id);
    }

    fn sync_dependants(&mut self) {
        let width = usize::from(self.last_known_width);
        let mut extra_lines: Vec<Line<'static>> = vec![];

        let entries = match self.mode {
            ViewMode::Chat => {
                if let Some(result) = self.controller.result() {
                    extra_lines = result_card_lines(&ResultPresenter::view(result));
                }
                if let Some(analysis) = &self.analysis {
                    extra_lines.append(&mut result_card_lines(&analysis_view(analysis)));
                }
                self.chat_entries()
            }
            ViewMode::HistoryList => self.history_entries(),
            ViewMode::HistoryDetail(id) => match self.history.get(id) {
                Some(record) => {
                    extra_lines = result_card_lines(&record_view(record));
                    ResultPresenter::transcript(&record.messages)
                        .iter()
                        .map(|entry| return BubbleEntry::new(entry.author, &entry.content))
                        .collect()
                }
                None => vec![],
            },
        };

        self.bubble_list.set_entries(&entries, width);
        self.bubble_list.push_lines(extra_lines);
        self.scroll
            .set_state(self.bubble_list.len() as u16, self.last_known_height);
    }

    fn chat_entries(&self) -> Vec<BubbleEntry> {
        let mut entries: Vec<BubbleEntry> =
            ResultPresenter::transcript(self.controller.confirmed_messages())
                .iter()
                .map(|entry| return BubbleEntry::new(entry.author, &entry.content))
                .collect();

        for pending in self.controller.pending() {
            let mut entry = BubbleEntry::new(Author::User, &pending.message.content);
            entry.error = pending.failed;
            entries.push(entry);
        }

        if let Some(error) = self.controller.error() {
            entries.push(BubbleEntry::error(Author::Wellcheck, error));
        }

        for notice in &self.notices {
            entries.push(BubbleEntry::new(Author::Wellcheck, notice));
        }

        return entries;
    }

    fn history_entries(&self) -> Vec<BubbleEntry> {
        if self.history_loading {
            return vec![BubbleEntry::new(Author::Wellcheck, "Loading your past assessments...")];
        }

        if self.history.records.is_empty() {
            return vec![BubbleEntry::new(
                Author::Wellcheck,
                "No completed assessments yet. /chat to go back and finish one.",
            )];
        }

        let listing = self
            .history
            .records
            .iter()
            .map(|record| {
                return format!(
                    "({}) {} {} {} - {}%",
                    record.id,
                    record.display_date,
                    ResultPresenter::severity_icon(record.level),
                    record.level,
                    ResultPresenter::score_percent(record.score),
                );
            })
            .collect::<Vec<String>>()
            .join("\n");

        return vec![BubbleEntry::new(Author::Wellcheck, &listing)];
    }
}

fn analysis_view(analysis: &AnalyzeResponse) -> ResultView {
    return ResultView {
        icon: ResultPresenter::severity_icon(analysis.level),
        headline: format!("{} BURNOUT RISK", analysis.level),
        description: ResultPresenter::severity_description(analysis.level),
        score_percent: ResultPresenter::score_percent(analysis.score),
        summary: Some(analysis.summary.to_string()).filter(|text| return !text.is_empty()),
        recommendation: ResultPresenter::recommendation_segments(&analysis.recommendation),
    };
}

fn record_view(record: &HistoryRecord) -> ResultView {
    return ResultView {
        icon: ResultPresenter::severity_icon(record.level),
        headline: format!("{} BURNOUT RISK", record.level),
        description: ResultPresenter::severity_description(record.level),
        score_percent: ResultPresenter::score_percent(record.score),
        summary: Some(record.summary.to_string()).filter(|text| return !text.is_empty()),
        recommendation: ResultPresenter::recommendation_segments(&record.recommendation),
    };
}

fn result_card_lines(view: &ResultView) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{} {}", view.icon, view.headline),
            bold,
        )),
        Line::from(format!("Score: {}%", view.score_percent)),
        Line::from(view.description),
        Line::from(""),
    ];

    if let Some(summary) = &view.summary {
        for text_line in summary.split('\n') {
            lines.push(Line::from(text_line.to_string()));
        }
        lines.push(Line::from(""));
    }

    for segment in &view.recommendation {
        match segment {
            RecommendationSegment::Emphasis(text) => {
                lines.push(Line::from(Span::styled(text.to_string(), bold)));
            }
            RecommendationSegment::Plain(text) => {
                lines.push(Line::from(text.to_string()));
            }
        }
    }

    return lines;
}
