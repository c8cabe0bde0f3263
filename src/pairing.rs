//! Round-robin fixture pairing (circle method).
//!
//! # Algorithm
//!
//! 1. Split the roster by index parity: even positions play at home, odd
//!    positions away. An odd roster gets a [`Slot::Bye`] appended to the
//!    away side so both sides have `ceil(n / 2)` entries.
//! 2. `home[i]` meets `away[i]`.
//! 3. Each rotation keeps `home[0]` fixed and moves every other slot one
//!    step around the circle.
//!
//! With `n` padded slots, `n - 1` rotations produce `n - 1` rounds in which
//! every pair of teams meets exactly once, and the next rotation returns to
//! the initial pairing.
//!
//! # Reference
//! Kirkman (1847); Dinitz et al. (2006), "Handbook of Combinatorial Designs",
//! Ch. VI.51 (Round Robin Tournaments)

use serde::Serialize;

/// One position in a pairing: a team or the bye placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Slot<T> {
    /// A participating team.
    Team(T),
    /// No opponent this round.
    Bye,
}

impl<T> Slot<T> {
    /// The team in this slot, if any.
    pub fn team(&self) -> Option<&T> {
        match self {
            Slot::Team(t) => Some(t),
            Slot::Bye => None,
        }
    }

    /// Whether this is the bye placeholder.
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }
}

/// Home and away sequences of equal length for one league.
///
/// # Example
///
/// ```
/// use league_schedule::pairing::PairingState;
///
/// let mut state = PairingState::create_pairs(vec!["A", "B", "C", "D"]);
/// let round1: Vec<_> = state.fixtures().collect();
/// assert_eq!(round1, vec![(&"A", &"B"), (&"C", &"D")]);
///
/// state.rotate();
/// let round2: Vec<_> = state.fixtures().collect();
/// assert_eq!(round2, vec![(&"A", &"C"), (&"D", &"B")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairingState<T> {
    home: Vec<Slot<T>>,
    away: Vec<Slot<T>>,
}

impl<T: Clone> PairingState<T> {
    /// Initial pairing from a roster, alternating home/away by index.
    pub fn create_pairs(roster: impl IntoIterator<Item = T>) -> Self {
        let mut home = Vec::new();
        let mut away = Vec::new();
        for (i, team) in roster.into_iter().enumerate() {
            if i % 2 == 0 {
                home.push(Slot::Team(team));
            } else {
                away.push(Slot::Team(team));
            }
        }
        if away.len() < home.len() {
            away.push(Slot::Bye);
        }
        Self { home, away }
    }

    /// Advances to the next round.
    ///
    /// `home' = [home[0]] ++ home[2..] ++ [away[last]]`,
    /// `away' = [home[1]] ++ away[..last]`. A single pair has no other
    /// pairing and is left unchanged.
    pub fn rotate(&mut self) {
        if self.home.len() < 2 {
            return;
        }
        let Some(last_away) = self.away.pop() else {
            return;
        };
        let second_home = self.home.remove(1);
        self.home.push(last_away);
        self.away.insert(0, second_home);
    }
}

impl<T> PairingState<T> {
    /// Home slots.
    pub fn home(&self) -> &[Slot<T>] {
        &self.home
    }

    /// Away slots.
    pub fn away(&self) -> &[Slot<T>] {
        &self.away
    }

    /// Number of pairs per round.
    pub fn len(&self) -> usize {
        self.home.len()
    }

    /// Whether the roster was empty.
    pub fn is_empty(&self) -> bool {
        self.home.is_empty()
    }

    /// Padded roster size (teams plus bye).
    pub fn slot_count(&self) -> usize {
        self.home.len() + self.away.len()
    }

    /// All pairs of the current round, byes included.
    pub fn pairs(&self) -> impl Iterator<Item = (&Slot<T>, &Slot<T>)> {
        self.home.iter().zip(self.away.iter())
    }

    /// Playable pairs of the current round (byes skipped).
    pub fn fixtures(&self) -> impl Iterator<Item = (&T, &T)> {
        self.pairs()
            .filter_map(|(h, a)| Some((h.team()?, a.team()?)))
    }
}
