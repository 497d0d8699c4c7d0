/// How many slots a surface rotates through, and which rotation rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferMode {
    /// Two slots in lock-step ping-pong. Enough when the producer is paced by
    /// an external source such as vsync.
    #[default]
    DoubleBuffer,

    /// Three slots in mailbox rotation. The producer never waits on the
    /// reader, and the reader always sees the newest completed frame.
    TripleBuffer,
}

impl BufferMode {
    pub fn slot_count(self) -> usize {
        match self {
            BufferMode::DoubleBuffer => 2,
            BufferMode::TripleBuffer => 3,
        }
    }
}

/// Slot roles of a rotating surface.
///
/// `front` is the last completed frame, `back` the slot being written and,
/// in triple buffer mode, `swap` the spare. The cursors always form a
/// permutation of the slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRotation {
    Double { front: usize, back: usize },
    Triple { front: usize, back: usize, swap: usize },
}

impl BufferRotation {
    pub fn new(mode: BufferMode) -> Self {
        match mode {
            BufferMode::DoubleBuffer => BufferRotation::Double { front: 0, back: 1 },
            BufferMode::TripleBuffer => BufferRotation::Triple { front: 0, back: 1, swap: 2 },
        }
    }

    pub fn mode(&self) -> BufferMode {
        match self {
            BufferRotation::Double { .. } => BufferMode::DoubleBuffer,
            BufferRotation::Triple { .. } => BufferMode::TripleBuffer,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.mode().slot_count()
    }

    pub fn front(&self) -> usize {
        match *self {
            BufferRotation::Double { front, .. } | BufferRotation::Triple { front, .. } => front,
        }
    }

    pub fn back(&self) -> usize {
        match *self {
            BufferRotation::Double { back, .. } | BufferRotation::Triple { back, .. } => back,
        }
    }

    pub fn swap(&self) -> Option<usize> {
        match *self {
            BufferRotation::Double { .. } => None,
            BufferRotation::Triple { swap, .. } => Some(swap),
        }
    }

    pub fn acquire_write_slot(&self) -> usize {
        self.back()
    }

    pub fn read_slot(&self) -> usize {
        self.front()
    }

    /// Moves every cursor to its role for the next frame.
    ///
    /// Double: the written slot becomes `front` and the other one `back`.
    /// Triple: `(front, back, swap) <- (back, swap, front)`, so the written
    /// slot is exposed, the spare is written next and the previously shown
    /// slot becomes the spare.
    pub fn advance(&mut self) {
        *self = match *self {
            BufferRotation::Double { back, .. } => {
                BufferRotation::Double { front: back, back: (back + 1) % 2 }
            }
            BufferRotation::Triple { front, back, swap } => {
                BufferRotation::Triple { front: back, back: swap, swap: front }
            }
        };
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cursors(rotation: &BufferRotation) -> Vec<usize> {
        let mut cursors = vec![rotation.front(), rotation.back()];
        cursors.extend(rotation.swap());
        cursors
    }

    fn assert_permutation(rotation: &BufferRotation) {
        let mut cursors = cursors(rotation);
        cursors.sort_unstable();
        let expected: Vec<usize> = (0 .. rotation.slot_count()).collect();
        assert_eq!(cursors, expected, "cursors alias a slot: {:?}", rotation);
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(BufferMode::DoubleBuffer.slot_count(), 2);
        assert_eq!(BufferMode::TripleBuffer.slot_count(), 3);
        assert_eq!(BufferMode::default(), BufferMode::DoubleBuffer);
    }

    #[test]
    fn test_initial_cursors() {
        let double = BufferRotation::new(BufferMode::DoubleBuffer);
        assert_eq!((double.front(), double.back(), double.swap()), (0, 1, None));

        let triple = BufferRotation::new(BufferMode::TripleBuffer);
        assert_eq!((triple.front(), triple.back(), triple.swap()), (0, 1, Some(2)));
    }

    #[test]
    fn test_double_buffer_write_slot_after_present() {
        let mut rotation = BufferRotation::new(BufferMode::DoubleBuffer);
        assert_eq!(rotation.acquire_write_slot(), 1);
        rotation.advance();
        assert_eq!(rotation.acquire_write_slot(), 0);
        assert_eq!(rotation.read_slot(), 1);
    }

    #[test]
    fn test_double_buffer_alternates() {
        let mut rotation = BufferRotation::new(BufferMode::DoubleBuffer);
        for presents in 1 ..= 16 {
            let before = rotation;
            rotation.advance();
            assert_eq!(rotation.front(), before.back());
            assert_eq!(rotation.back(), before.front());
            if presents % 2 == 0 {
                assert_eq!(rotation, BufferRotation::new(BufferMode::DoubleBuffer));
            }
        }
    }

    #[test]
    fn test_triple_buffer_rotates() {
        let mut rotation = BufferRotation::new(BufferMode::TripleBuffer);
        for _ in 0 .. 10 {
            let before = rotation;
            rotation.advance();
            assert_eq!(rotation.front(), before.back());
            assert_eq!(rotation.back(), before.swap().unwrap());
            assert_eq!(rotation.swap(), Some(before.front()));
        }
    }

    #[test]
    fn test_triple_buffer_period_is_three() {
        let initial = BufferRotation::new(BufferMode::TripleBuffer);
        let mut rotation = initial;

        rotation.advance();
        let after_first = rotation;
        assert_ne!(after_first, initial);

        rotation.advance();
        assert_ne!(rotation, initial);

        rotation.advance();
        assert_eq!(rotation, initial);

        rotation.advance();
        assert_eq!(rotation, after_first);
    }

    #[test]
    fn test_triple_buffer_front_follows_present_count() {
        let mut rotation = BufferRotation::new(BufferMode::TripleBuffer);
        for k in 0 .. 12 {
            assert_eq!(rotation.front(), k % 3);
            assert_eq!(rotation.back(), (k + 1) % 3);
            assert_eq!(rotation.swap(), Some((k + 2) % 3));
            rotation.advance();
        }
    }

    #[test]
    fn test_cursors_never_alias() {
        for mode in [BufferMode::DoubleBuffer, BufferMode::TripleBuffer] {
            let mut rotation = BufferRotation::new(mode);
            assert_permutation(&rotation);
            for _ in 0 .. 32 {
                rotation.advance();
                assert_permutation(&rotation);
            }
        }
    }

    #[test]
    fn test_acquire_is_side_effect_free() {
        for mode in [BufferMode::DoubleBuffer, BufferMode::TripleBuffer] {
            let mut rotation = BufferRotation::new(mode);
            rotation.advance();
            let before = rotation;
            let first = rotation.acquire_write_slot();
            for _ in 0 .. 5 {
                assert_eq!(rotation.acquire_write_slot(), first);
            }
            assert_eq!(rotation, before);
        }
    }

    #[test]
    fn test_written_slot_becomes_readable() {
        for mode in [BufferMode::DoubleBuffer, BufferMode::TripleBuffer] {
            let mut rotation = BufferRotation::new(mode);
            for _ in 0 .. 7 {
                let written = rotation.acquire_write_slot();
                rotation.advance();
                assert_eq!(rotation.read_slot(), written);
                assert_ne!(rotation.acquire_write_slot(), written);
            }
        }
    }
}
