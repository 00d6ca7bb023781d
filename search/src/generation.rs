/// Identifies one outstanding request; compared against [`Generation`] on completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Monotonic counter; advancing it invalidates every token issued before.
#[derive(Debug, Default)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }
}
