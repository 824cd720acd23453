//! Request sequencing: monotonic tickets per channel.
//!
//! Listing, search and cart requests take a ticket from their channel before
//! they are sent. When the response arrives it is applied only if no newer
//! ticket has been issued on the same channel since; otherwise it is dropped,
//! so the view reflects the newest-dispatched request whatever order responses
//! resolve in. Wishlist mutations are not ticketed: their results apply in
//! resolution order.

use std::sync::atomic::{AtomicU64, Ordering};

/// Independent request streams. A newer request on one channel never
/// invalidates an older one on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    Search,
    Cart,
    Wishlist,
    Category,
    Deals,
    Orders,
}

impl Channel {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            Channel::Search => 0,
            Channel::Cart => 1,
            Channel::Wishlist => 2,
            Channel::Category => 3,
            Channel::Deals => 4,
            Channel::Orders => 5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Search => "search",
            Channel::Cart => "cart",
            Channel::Wishlist => "wishlist",
            Channel::Category => "category",
            Channel::Deals => "deals",
            Channel::Orders => "orders",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Proof of dispatch order, handed out by [`Sequencer::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket {
    channel: Channel,
    seq: u64,
}

impl Ticket {
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Position in the channel's dispatch order, starting at 1.
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Issues tickets and answers whether a ticket is still the latest.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: [AtomicU64; Channel::COUNT],
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self, channel: Channel) -> Ticket {
        let seq = self.latest[channel.index()].fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { channel, seq }
    }

    /// Whether no newer ticket has been issued on the ticket's channel.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.channel.index()].load(Ordering::SeqCst) == ticket.seq
    }

    /// Like [`Self::is_current`], logging the discard when it is not.
    pub fn accept(&self, ticket: Ticket) -> bool {
        let current = self.is_current(ticket);
        if !current {
            tracing::debug!(
                channel = %ticket.channel,
                seq = ticket.seq,
                latest = self.latest[ticket.channel.index()].load(Ordering::SeqCst),
                "discarding stale response"
            );
        }
        current
    }

    /// Make every outstanding ticket on `channel` stale without sending
    /// anything, e.g. when the search box is cleared.
    pub fn invalidate(&self, channel: Channel) {
        self.latest[channel.index()].fetch_add(1, Ordering::SeqCst);
    }
}
