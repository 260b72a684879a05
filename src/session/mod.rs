//! Which card is showing, which face is up, and the flip animation that moves between faces.
//!
//! Everything here runs on the UI thread. Deferred work goes through a [`TimerQueue`] that the
//! app polls once per frame with the elapsed time since startup.

pub mod animation;
pub mod timers;

use std::time::Duration;

use animation::FlipAnimation;
use timers::TimerQueue;

use crate::{
    core::{
        Face,
        Flashcard,
        SpeakRequest,
    },
    deck::Deck,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTiming {
    pub animation_steps: u32,
    pub step_interval: Duration,
    pub play_delay: Duration,
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            animation_steps: 10,
            step_interval: Duration::from_millis(20),
            play_delay: Duration::from_millis(10),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipGuard {
    Idle,
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerEvent {
    AnimationStep { generation: u64 },
    Play,
}

/// Content of the face currently drawn. Swaps at the animation midpoint, not when the flip starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub face: Face,
    pub language_label: String,
    pub word: String,
    pub hint: &'static str,
}

impl CardView {
    fn of(card: &Flashcard, face: Face) -> Self {
        let (word, language) = card.side(face);
        let hint = match face {
            Face::Front => "Click card to flip →",
            Face::Back => "Click card to flip back ←",
        };
        CardView {
            face,
            language_label: language.to_uppercase(),
            word: word.to_string(),
            hint,
        }
    }
}

pub struct Session {
    deck: Deck,
    current_index: usize,
    face: Face,
    shown: Face,
    guard: FlipGuard,
    animation: Option<FlipAnimation>,
    generation: u64,
    timers: TimerQueue<TimerEvent>,
    timing: SessionTiming,
}

impl Session {
    pub fn new(deck: Deck, timing: SessionTiming) -> Self {
        Self {
            deck,
            current_index: 0,
            face: Face::Front,
            shown: Face::Front,
            guard: FlipGuard::Idle,
            animation: None,
            generation: 0,
            timers: TimerQueue::new(),
            timing,
        }
    }

    /// Toggles the face and starts the flip animation. Ignored while a flip is in flight.
    /// Returns whether a flip started.
    pub fn flip(&mut self, now: Duration) -> bool {
        if self.guard == FlipGuard::Animating {
            log::debug!("Flip ignored, animation in progress");
            return false;
        }
        if self.deck.is_empty() {
            return false;
        }

        self.face = self.face.flipped();
        self.guard = FlipGuard::Animating;
        self.generation += 1;
        self.animation = Some(FlipAnimation::new(self.timing.animation_steps, self.face));

        // First step runs immediately, the rest are re-armed from the timer queue.
        self.run_animation_step(now);
        true
    }

    /// Flips, then plays the face that is up once the delay elapses.
    pub fn flip_and_play(&mut self, now: Duration) {
        self.flip(now);
        self.timers.schedule(now + self.timing.play_delay, TimerEvent::Play);
    }

    pub fn next(&mut self) -> Option<SpeakRequest> {
        if !self.can_next() {
            return None;
        }
        self.current_index += 1;
        self.show_card();
        self.play()
    }

    pub fn prev(&mut self) -> Option<SpeakRequest> {
        if !self.can_prev() {
            return None;
        }
        self.current_index -= 1;
        self.show_card();
        self.play()
    }

    /// Speech for the face that is currently up.
    pub fn play(&self) -> Option<SpeakRequest> {
        match self.current_card() {
            Some(card) => Some(SpeakRequest::for_face(card, self.face)),
            None => {
                log::warn!("No translations loaded.");
                None
            }
        }
    }

    /// Runs every timer due at `now` and returns the speech they requested.
    pub fn tick(&mut self, now: Duration) -> Vec<SpeakRequest> {
        let mut requests = Vec::new();

        while let Some((deadline, event)) = self.timers.pop_due(now) {
            match event {
                TimerEvent::AnimationStep { generation } if generation == self.generation => {
                    self.run_animation_step(deadline);
                }
                TimerEvent::AnimationStep { .. } => {}
                TimerEvent::Play => requests.extend(self.play()),
            }
        }

        requests
    }

    fn run_animation_step(&mut self, at: Duration) {
        let Some(animation) = self.animation.as_mut() else {
            return;
        };

        let outcome = animation.advance();
        if outcome.swap_face {
            self.shown = animation.target();
        }

        if outcome.finished {
            self.animation = None;
            self.guard = FlipGuard::Idle;
        } else {
            self.timers.schedule(
                at + self.timing.step_interval,
                TimerEvent::AnimationStep { generation: self.generation },
            );
        }
    }

    fn show_card(&mut self) {
        if self.animation.take().is_some() {
            // Pending steps of the abandoned flip no longer match.
            self.generation += 1;
        }
        self.guard = FlipGuard::Idle;
        self.face = Face::Front;
        self.shown = Face::Front;
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_flipped(&self) -> bool {
        self.face.is_back()
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn guard(&self) -> FlipGuard {
        self.guard
    }

    pub fn is_animating(&self) -> bool {
        self.guard == FlipGuard::Animating
    }

    pub fn card_view(&self) -> Option<CardView> {
        self.current_card().map(|card| CardView::of(card, self.shown))
    }

    pub fn scale(&self) -> f32 {
        self.animation.as_ref().map_or(1.0, FlipAnimation::scale)
    }

    pub fn can_prev(&self) -> bool {
        !self.deck.is_empty() && self.current_index > 0
    }

    pub fn can_next(&self) -> bool {
        self.deck.last_index().is_some_and(|last| self.current_index < last)
    }

    pub fn counter_text(&self) -> String {
        if self.deck.is_empty() {
            "No cards loaded".to_string()
        } else {
            format!("Card {} of {}", self.current_index + 1, self.deck.len())
        }
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn deck(words: &[(&str, &str)]) -> Deck {
        Deck::new(
            words
                .iter()
                .map(|(source, target)| Flashcard::new("English", *source, "German", *target))
                .collect(),
        )
    }

    fn session() -> Session {
        Session::new(
            deck(&[("Hello", "Hallo"), ("House", "Haus"), ("Dog", "Hund")]),
            SessionTiming::default(),
        )
    }

    /// Drives the timers far enough for any pending animation to finish.
    fn settle(session: &mut Session, now: Duration) -> Vec<SpeakRequest> {
        session.tick(now + Duration::from_secs(5))
    }

    #[test]
    fn test_starts_on_front_of_first_card() {
        let session = session();
        let view = session.card_view().unwrap();

        assert_eq!(session.current_index(), 0);
        assert!(!session.is_flipped());
        assert_eq!(view.word, "Hello");
        assert_eq!(view.language_label, "ENGLISH");
        assert_eq!(session.counter_text(), "Card 1 of 3");
        assert!(!session.can_prev());
        assert!(session.can_next());
    }

    #[test]
    fn test_index_stays_in_bounds() {
        let mut session = session();
        let moves = [true, true, true, true, false, true, false, false, false, false, true];

        for forward in moves {
            if forward {
                session.next();
            } else {
                session.prev();
            }
            assert!(session.current_index() < session.deck().len());
        }

        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.current_index(), 2);
        assert!(!session.can_next());
        assert_eq!(session.next(), None);
    }

    #[test]
    fn test_next_then_prev_restores_index_and_front() {
        let mut session = session();
        session.flip(ms(0));
        settle(&mut session, ms(0));
        assert!(session.is_flipped());

        let spoken = session.next().unwrap();
        assert_eq!(spoken, SpeakRequest { word: "House".into(), language: "English".into() });
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_flipped());

        session.prev();
        assert_eq!(session.current_index(), 0);
        assert!(!session.is_flipped());
        assert_eq!(session.card_view().unwrap().word, "Hello");
    }

    #[test]
    fn test_double_flip_restores_face() {
        let mut session = session();
        let before = session.card_view().unwrap();

        assert!(session.flip(ms(0)));
        settle(&mut session, ms(0));
        assert!(session.is_flipped());
        assert_eq!(session.card_view().unwrap().word, "Hallo");

        assert!(session.flip(ms(1000)));
        settle(&mut session, ms(1000));
        assert!(!session.is_flipped());
        assert_eq!(session.card_view().unwrap(), before);
        assert_eq!(session.guard(), FlipGuard::Idle);
    }

    #[test]
    fn test_flip_while_animating_is_ignored() {
        let mut session = session();
        assert!(session.flip(ms(0)));
        assert!(session.is_animating());

        session.tick(ms(20));
        let face = session.face();
        let scale = session.scale();

        assert!(!session.flip(ms(25)));
        assert_eq!(session.face(), face);
        assert_eq!(session.scale(), scale);
        assert!(session.is_animating());
    }

    #[test]
    fn test_content_swaps_at_midpoint() {
        let mut session = session();
        session.flip(ms(0));

        // Step 1 ran synchronously; steps 2..=4 are due by 60ms.
        session.tick(ms(60));
        assert_eq!(session.card_view().unwrap().word, "Hello");
        assert!(session.scale() < 1.0);

        // Step 5 at 80ms is the midpoint.
        session.tick(ms(80));
        let view = session.card_view().unwrap();
        assert_eq!(view.word, "Hallo");
        assert_eq!(view.face, Face::Back);
        assert_eq!(view.hint, "Click card to flip back ←");
        assert!((session.scale() - 0.9).abs() < 1e-5);

        // Step 10 at 180ms finishes.
        session.tick(ms(179));
        assert!(session.is_animating());
        session.tick(ms(180));
        assert!(!session.is_animating());
        assert_eq!(session.scale(), 1.0);
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_navigation_cancels_flip_in_flight() {
        let mut session = session();
        session.flip(ms(0));
        session.tick(ms(40));

        session.next();
        assert!(!session.is_animating());
        assert_eq!(session.scale(), 1.0);

        // Stale steps of the old flip must not swap the new card's face.
        settle(&mut session, ms(40));
        let view = session.card_view().unwrap();
        assert_eq!(view.word, "House");
        assert_eq!(view.face, Face::Front);
    }

    #[test]
    fn test_flip_and_play_speaks_new_face() {
        let mut session = Session::new(deck(&[("Hello", "Hallo")]), SessionTiming::default());
        assert_eq!(session.card_view().unwrap().word, "Hello");

        session.flip_and_play(ms(0));
        assert_eq!(session.tick(ms(5)), vec![]);

        let spoken = session.tick(ms(10));
        assert_eq!(spoken, vec![SpeakRequest { word: "Hallo".into(), language: "German".into() }]);

        settle(&mut session, ms(10));
        let view = session.card_view().unwrap();
        assert_eq!(view.word, "Hallo");
        assert_eq!(view.language_label, "GERMAN");
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let mut session = Session::new(Deck::empty(), SessionTiming::default());

        assert!(!session.flip(ms(0)));
        assert_eq!(session.next(), None);
        assert_eq!(session.prev(), None);
        assert_eq!(session.play(), None);
        assert!(session.card_view().is_none());
        assert!(!session.can_next());
        assert!(!session.can_prev());
        assert_eq!(session.counter_text(), "No cards loaded");

        session.flip_and_play(ms(0));
        assert!(settle(&mut session, ms(0)).is_empty());
    }
}
