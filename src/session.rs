use crate::error::SessionError;
use crate::history::{History, Pager};
use crate::word::WordEntry;
use rand::Rng;

/// Where the word library stands from the client's point of view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryStatus {
    /// The initial fetch has not resolved yet
    Loading,
    Ready,
    /// The fetch succeeded but returned no words
    Empty,
    /// The fetch failed; carries the reason for the message line
    Failed(String),
}

/// The words of the active round and the cursor into them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    words: Vec<WordEntry>,
    cursor: usize,
    meaning_visible: bool,
}

/// Sub-state of a running round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStage {
    InProgress,
    /// The cursor is on the last card; a new round may be started
    Complete,
}

impl Round {
    fn new(words: Vec<WordEntry>) -> Self {
        Round {
            words,
            cursor: 0,
            meaning_visible: false,
        }
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.words.get(self.cursor)
    }

    pub fn meaning_visible(&self) -> bool {
        self.meaning_visible
    }

    pub fn stage(&self) -> RoundStage {
        if self.cursor + 1 >= self.words.len() {
            RoundStage::Complete
        } else {
            RoundStage::InProgress
        }
    }

    fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.words.len() {
            self.cursor += 1;
            self.meaning_visible = false;
            true
        } else {
            false
        }
    }

    fn rewind(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.meaning_visible = false;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a round size
    Setup,
    InRound(Round),
}

/// Something the user (or the initial fetch) did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    WordsLoaded(Vec<WordEntry>),
    WordsFailed(String),
    /// Raw text of the round-size input
    StartRound(String),
    ToggleMeaning,
    Next,
    Prev,
    NewRound,
    HistoryPrev,
    HistoryNext,
    ToggleMark(String),
}

/// What an accepted event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Updated,
    /// Accepted but nothing changed (clamped move, event out of phase)
    Unchanged,
    /// Every word in the library is already in history; still in setup
    AllLearned,
}

/// All client state for one page session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub words: Vec<WordEntry>,
    pub library: LibraryStatus,
    pub phase: Phase,
    pub history: History,
    pub pager: Pager,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            words: Vec::new(),
            library: LibraryStatus::Loading,
            phase: Phase::Setup,
            history: History::new(),
            pager: Pager::default(),
        }
    }
}

impl SessionState {
    pub fn round(&self) -> Option<&Round> {
        match &self.phase {
            Phase::InRound(round) => Some(round),
            Phase::Setup => None,
        }
    }

    pub fn can_start(&self) -> bool {
        self.library == LibraryStatus::Ready && !self.words.is_empty()
    }

    /// Apply one event
    ///
    /// Rejected events return an error and leave the state untouched.
    pub fn apply<R: Rng + ?Sized>(
        &mut self,
        event: Event,
        rng: &mut R,
    ) -> Result<Outcome, SessionError> {
        match event {
            Event::WordsLoaded(words) => {
                self.library = if words.is_empty() {
                    LibraryStatus::Empty
                } else {
                    LibraryStatus::Ready
                };
                self.words = words;
                Ok(Outcome::Updated)
            }
            Event::WordsFailed(reason) => {
                self.library = LibraryStatus::Failed(reason);
                Ok(Outcome::Updated)
            }
            Event::StartRound(input) => self.start_round(&input, rng),
            Event::ToggleMeaning => Ok(self.toggle_meaning()),
            Event::Next => Ok(self.move_cursor(Round::advance)),
            Event::Prev => Ok(self.move_cursor(Round::rewind)),
            Event::NewRound => {
                if self.round().is_none() {
                    return Ok(Outcome::Unchanged);
                }
                self.phase = Phase::Setup;
                Ok(Outcome::Updated)
            }
            Event::HistoryPrev => Ok(changed(self.pager.previous())),
            Event::HistoryNext => Ok(changed(self.pager.next(&self.history))),
            Event::ToggleMark(word) => Ok(changed(self.history.toggle_mark(&word))),
        }
    }

    fn start_round<R: Rng + ?Sized>(
        &mut self,
        input: &str,
        rng: &mut R,
    ) -> Result<Outcome, SessionError> {
        let size = parse_round_size(input)?;
        match &self.library {
            LibraryStatus::Failed(reason) => {
                return Err(SessionError::FetchFailure(reason.clone()));
            }
            LibraryStatus::Loading | LibraryStatus::Empty => return Err(SessionError::EmptyStore),
            LibraryStatus::Ready if self.words.is_empty() => return Err(SessionError::EmptyStore),
            LibraryStatus::Ready => {}
        }
        if self.round().is_some() {
            return Ok(Outcome::Unchanged);
        }

        let mut pool = self.words.clone();
        shuffle(&mut pool, rng);

        // History is consulted once here; words revealed later in the round
        // stay in the round.
        let selected: Vec<WordEntry> = pool
            .into_iter()
            .filter(|entry| !self.history.contains(&entry.word))
            .take(size)
            .collect();

        if selected.is_empty() {
            self.phase = Phase::Setup;
            return Ok(Outcome::AllLearned);
        }

        log::debug!("starting round of {} words", selected.len());
        self.phase = Phase::InRound(Round::new(selected));
        Ok(Outcome::Updated)
    }

    fn toggle_meaning(&mut self) -> Outcome {
        let Phase::InRound(round) = &mut self.phase else {
            return Outcome::Unchanged;
        };
        let Some(current) = round.words.get(round.cursor) else {
            return Outcome::Unchanged;
        };

        round.meaning_visible = !round.meaning_visible;
        if round.meaning_visible {
            self.history.record_reveal(current);
            self.pager.reset();
        }
        Outcome::Updated
    }

    fn move_cursor(&mut self, step: fn(&mut Round) -> bool) -> Outcome {
        match &mut self.phase {
            Phase::InRound(round) => changed(step(round)),
            Phase::Setup => Outcome::Unchanged,
        }
    }
}

fn changed(moved: bool) -> Outcome {
    if moved {
        Outcome::Updated
    } else {
        Outcome::Unchanged
    }
}

/// Read the round-size input the way a browser reads an integer prefix
///
/// Leading whitespace and a sign are accepted, then digits; anything after the
/// digits is ignored. Zero, negatives and inputs without digits are rejected.
///
/// # Examples
/// ```
/// use flashcards::session::parse_round_size;
///
/// assert_eq!(parse_round_size(" 12 words"), Ok(12));
/// assert!(parse_round_size("abc").is_err());
/// assert!(parse_round_size("0").is_err());
/// ```
pub fn parse_round_size(input: &str) -> Result<usize, SessionError> {
    let invalid = || SessionError::InvalidRoundSize(input.to_string());

    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return Err(invalid());
    }

    let value = rest[..digit_count].parse::<usize>().unwrap_or(usize::MAX);
    if negative || value == 0 {
        return Err(invalid());
    }
    Ok(value)
}

/// Uniform in-place Fisher–Yates shuffle, walking from the last index down
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Session state together with the random source used for shuffling
pub struct Trainer<R: Rng> {
    state: SessionState,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    pub fn new(rng: R) -> Self {
        Trainer {
            state: SessionState::default(),
            rng,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn handle(&mut self, event: Event) -> Result<Outcome, SessionError> {
        self.state.apply(event, &mut self.rng)
    }

    /// Project the current state for rendering
    pub fn view(&self) -> crate::view::View {
        crate::view::render(&self.state)
    }
}
