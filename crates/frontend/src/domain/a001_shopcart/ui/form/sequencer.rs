use super::state::Region;

/// Issued when a request is dispatched; only the newest ticket of a region may
/// apply its completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub region: Region,
    pub seq: u64,
}

/// Monotonic per-region request counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestSequencer {
    shopcart: u64,
    item: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&mut self, region: Region) -> &mut u64 {
        match region {
            Region::Shopcart => &mut self.shopcart,
            Region::Item => &mut self.item,
        }
    }

    /// Take a ticket, invalidating every earlier ticket of the same region
    pub fn dispatch(&mut self, region: Region) -> Ticket {
        let counter = self.counter(region);
        *counter += 1;
        Ticket {
            region,
            seq: *counter,
        }
    }

    /// Invalidate in-flight tickets without issuing a new request
    pub fn invalidate(&mut self, region: Region) {
        *self.counter(region) += 1;
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        let latest = match ticket.region {
            Region::Shopcart => self.shopcart,
            Region::Item => self.item,
        };
        ticket.seq == latest
    }
}
