//! Plain-data projection of [`SessionState`] for the page to draw.
//!
//! Nothing here touches a rendering environment; the browser script only copies
//! these fields onto elements.

use crate::history::HistoryEntry;
use crate::session::{LibraryStatus, RoundStage, SessionState};
use serde::Serialize;

pub const EMPTY_LIBRARY_MESSAGE: &str = "The word library is empty";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load words";
pub const LOADING_MESSAGE: &str = "Loading words...";
pub const NO_HISTORY_MESSAGE: &str = "No records yet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// Message shown in place of a word when the library is unusable
    pub status: Option<String>,
    pub setup: SetupView,
    pub card: Option<CardView>,
    pub history: HistoryView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupView {
    pub visible: bool,
    pub start_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub word: String,
    pub meaning: String,
    pub meaning_visible: bool,
    /// "current / total", 1-based
    pub progress: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub new_round_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub word: String,
    pub meaning: String,
    pub is_marked: bool,
    pub mark_label: &'static str,
}

impl From<HistoryEntry> for HistoryRow {
    fn from(entry: HistoryEntry) -> Self {
        HistoryRow {
            mark_label: if entry.is_marked { "Unmark" } else { "Mark" },
            word: entry.word,
            meaning: entry.meaning,
            is_marked: entry.is_marked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub rows: Vec<HistoryRow>,
    /// Placeholder text when nothing has been revealed
    pub placeholder: Option<&'static str>,
    pub pagination_visible: bool,
    pub page_indicator: String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

/// Project the session state into a view
pub fn render(state: &SessionState) -> View {
    let status = match &state.library {
        LibraryStatus::Loading => Some(LOADING_MESSAGE.to_string()),
        LibraryStatus::Ready => None,
        LibraryStatus::Empty => Some(EMPTY_LIBRARY_MESSAGE.to_string()),
        LibraryStatus::Failed(_) => Some(LOAD_FAILED_MESSAGE.to_string()),
    };

    let card = state.round().and_then(|round| {
        let current = round.current()?;
        let last = round.stage() == RoundStage::Complete;
        Some(CardView {
            word: current.word.clone(),
            meaning: current.meaning.clone(),
            meaning_visible: round.meaning_visible(),
            progress: format!("{} / {}", round.cursor() + 1, round.len()),
            prev_enabled: round.cursor() > 0,
            next_enabled: !last,
            new_round_visible: last,
        })
    });

    View {
        status,
        setup: SetupView {
            visible: card.is_none(),
            start_enabled: state.can_start(),
        },
        card,
        history: render_history(state),
    }
}

fn render_history(state: &SessionState) -> HistoryView {
    let page_size = state.pager.page_size;
    let page = state.history.page(state.pager.current, page_size);
    let total_pages = page.total_pages;

    let rows: Vec<HistoryRow> = page.items.into_iter().map(HistoryRow::from).collect();

    HistoryView {
        placeholder: state.history.is_empty().then_some(NO_HISTORY_MESSAGE),
        rows,
        pagination_visible: total_pages > 1,
        page_indicator: format!("Page {} / {}", page.number, total_pages),
        prev_enabled: page.number > 1,
        next_enabled: page.number < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Event, Trainer};
    use crate::word::WordEntry;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_test::{Token, assert_ser_tokens};

    fn trainer(count: usize) -> Trainer<StdRng> {
        let mut trainer = Trainer::new(StdRng::seed_from_u64(11));
        let words = (0..count)
            .map(|n| WordEntry::new(format!("w{}", n), format!("m{}", n)))
            .collect();
        trainer.handle(Event::WordsLoaded(words)).unwrap();
        trainer
    }

    #[test]
    fn loading_disables_start() {
        let trainer: Trainer<StdRng> = Trainer::new(StdRng::seed_from_u64(0));
        let view = trainer.view();
        assert_eq!(view.status.as_deref(), Some(LOADING_MESSAGE));
        assert!(!view.setup.start_enabled);
        assert!(view.setup.visible);
    }

    #[test]
    fn empty_library_message_and_disabled_start() {
        let view = trainer(0).view();
        assert_eq!(view.status.as_deref(), Some(EMPTY_LIBRARY_MESSAGE));
        assert!(!view.setup.start_enabled);
        assert!(view.card.is_none());
    }

    #[test]
    fn failed_fetch_message() {
        let mut trainer: Trainer<StdRng> = Trainer::new(StdRng::seed_from_u64(0));
        trainer.handle(Event::WordsFailed("timeout".into())).unwrap();
        let view = trainer.view();
        assert_eq!(view.status.as_deref(), Some(LOAD_FAILED_MESSAGE));
        assert!(!view.setup.start_enabled);
    }

    #[test]
    fn card_controls_follow_cursor() {
        let mut trainer = trainer(3);
        trainer.handle(Event::StartRound("3".into())).unwrap();

        let view = trainer.view();
        assert!(!view.setup.visible);
        let card = view.card.unwrap();
        assert_eq!(card.progress, "1 / 3");
        assert!(!card.prev_enabled);
        assert!(card.next_enabled);
        assert!(!card.new_round_visible);
        assert!(!card.meaning_visible);

        trainer.handle(Event::Next).unwrap();
        trainer.handle(Event::Next).unwrap();
        let card = trainer.view().card.unwrap();
        assert_eq!(card.progress, "3 / 3");
        assert!(card.prev_enabled);
        assert!(!card.next_enabled);
        assert!(card.new_round_visible);
    }

    #[test]
    fn single_card_round_offers_new_round_immediately() {
        let mut trainer = trainer(5);
        trainer.handle(Event::StartRound("1".into())).unwrap();
        let card = trainer.view().card.unwrap();
        assert!(card.new_round_visible);
        assert!(!card.next_enabled);
    }

    #[test]
    fn history_placeholder_and_hidden_pagination() {
        let view = trainer(2).view();
        assert_eq!(view.history.placeholder, Some(NO_HISTORY_MESSAGE));
        assert!(view.history.rows.is_empty());
        assert!(!view.history.pagination_visible);
    }

    #[test]
    fn history_pages_through_reveals() {
        let mut trainer = trainer(12);
        trainer.handle(Event::StartRound("12".into())).unwrap();
        for _ in 0..12 {
            trainer.handle(Event::ToggleMeaning).unwrap();
            trainer.handle(Event::Next).unwrap();
        }

        let history = trainer.view().history;
        assert!(history.placeholder.is_none());
        assert!(history.pagination_visible);
        assert_eq!(history.rows.len(), 10);
        assert_eq!(history.page_indicator, "Page 1 / 2");
        assert!(!history.prev_enabled);
        assert!(history.next_enabled);

        trainer.handle(Event::HistoryNext).unwrap();
        let history = trainer.view().history;
        assert_eq!(history.rows.len(), 2);
        assert!(history.prev_enabled);
        assert!(!history.next_enabled);

        // a new reveal jumps back to the first page
        trainer.handle(Event::ToggleMeaning).unwrap();
        trainer.handle(Event::ToggleMeaning).unwrap();
        assert_eq!(trainer.view().history.page_indicator, "Page 1 / 2");
    }

    #[test]
    fn marked_rows_carry_unmark_label() {
        let mut trainer = trainer(1);
        trainer.handle(Event::StartRound("1".into())).unwrap();
        trainer.handle(Event::ToggleMeaning).unwrap();
        trainer.handle(Event::ToggleMark("w0".into())).unwrap();

        let row = &trainer.view().history.rows[0];
        assert!(row.is_marked);
        assert_eq!(row.mark_label, "Unmark");

        let json = serde_json::to_value(row).unwrap();
        assert_eq!(json["isMarked"], true);
        assert_eq!(json["markLabel"], "Unmark");
    }

    // Rows and views must reach the browser as plain objects, never maps.
    #[test]
    fn history_row_serializes_as_struct() {
        let row = HistoryRow::from(HistoryEntry {
            word: "cat".into(),
            meaning: "a small feline".into(),
            is_marked: true,
        });
        assert_ser_tokens(
            &row,
            &[
                Token::Struct {
                    name: "HistoryRow",
                    len: 4,
                },
                Token::Str("word"),
                Token::Str("cat"),
                Token::Str("meaning"),
                Token::Str("a small feline"),
                Token::Str("isMarked"),
                Token::Bool(true),
                Token::Str("markLabel"),
                Token::Str("Unmark"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn loading_view_serializes_as_nested_structs() {
        let trainer: Trainer<StdRng> = Trainer::new(StdRng::seed_from_u64(0));
        assert_ser_tokens(
            &trainer.view(),
            &[
                Token::Struct {
                    name: "View",
                    len: 4,
                },
                Token::Str("status"),
                Token::Some,
                Token::Str(LOADING_MESSAGE),
                Token::Str("setup"),
                Token::Struct {
                    name: "SetupView",
                    len: 2,
                },
                Token::Str("visible"),
                Token::Bool(true),
                Token::Str("startEnabled"),
                Token::Bool(false),
                Token::StructEnd,
                Token::Str("card"),
                Token::None,
                Token::Str("history"),
                Token::Struct {
                    name: "HistoryView",
                    len: 6,
                },
                Token::Str("rows"),
                Token::Seq { len: Some(0) },
                Token::SeqEnd,
                Token::Str("placeholder"),
                Token::Some,
                Token::Str(NO_HISTORY_MESSAGE),
                Token::Str("paginationVisible"),
                Token::Bool(false),
                Token::Str("pageIndicator"),
                Token::Str("Page 1 / 0"),
                Token::Str("prevEnabled"),
                Token::Bool(false),
                Token::Str("nextEnabled"),
                Token::Bool(false),
                Token::StructEnd,
                Token::StructEnd,
            ],
        );
    }
}
