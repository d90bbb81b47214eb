//! Group detail view state
//!
//! [`GroupDetailState`] is the single value the controller publishes. Views
//! only read it. Each asynchronous read carries a [`Ticket`] taken when it
//! started; a result is applied only while its ticket is still current, so a
//! response for an older page or an older request never overwrites newer
//! state.

use crate::shared::{Address, Coordinates, GroupAction, GroupDetail, GroupId, PostSummary};

/// Primary group read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    /// Read failed; an earlier detail, if any, is kept alongside
    Failed(String),
}

/// Address-derived coordinate read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoordinatesState {
    #[default]
    Idle,
    Loading(Address),
    Loaded(Coordinates),
    /// No match or the lookup failed; the map is omitted
    Unavailable,
}

/// Board preview read
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PostsState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<PostSummary>),
    /// Rendered exactly like an empty board
    Failed,
}

/// Coarse phase of the page, for rendering and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingGroup,
    GroupLoaded,
    GroupLoadFailed,
    ConfirmPending,
    Closed,
}

/// Request ticket: the page generation plus a per-read sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticket {
    page: u64,
    seq: u64,
}

impl Ticket {
    pub fn page(&self) -> u64 {
        self.page
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Tickets {
    page: u64,
    group: u64,
    posts: u64,
}

/// Everything the detail page renders
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupDetailState {
    pub group_id: Option<GroupId>,
    pub group_status: GroupStatus,
    /// The authoritative detail; replaced wholesale, never merged
    pub group: Option<GroupDetail>,
    pub coordinates: CoordinatesState,
    pub posts: PostsState,
    /// Delete confirmation modal is open
    pub confirm_pending: bool,
    pub action_in_flight: Option<GroupAction>,
    /// Most recent action error; a new action replaces it
    pub action_error: Option<String>,
    /// Unmounted or navigated away; nothing changes afterwards
    pub closed: bool,
    tickets: Tickets,
}

impl GroupDetailState {
    pub fn phase(&self) -> Phase {
        if self.closed {
            return Phase::Closed;
        }
        match self.group_status {
            GroupStatus::Idle => Phase::Idle,
            GroupStatus::Loading => Phase::LoadingGroup,
            GroupStatus::Failed(_) => Phase::GroupLoadFailed,
            GroupStatus::Loaded if self.confirm_pending => Phase::ConfirmPending,
            GroupStatus::Loaded => Phase::GroupLoaded,
        }
    }

    /// The loaded detail, only while the page is in the loaded phase
    pub fn loaded_group(&self) -> Option<&GroupDetail> {
        match self.group_status {
            GroupStatus::Loaded if !self.closed => self.group.as_ref(),
            _ => None,
        }
    }

    pub fn coordinates(&self) -> Option<&Coordinates> {
        match &self.coordinates {
            CoordinatesState::Loaded(coordinates) => Some(coordinates),
            _ => None,
        }
    }

    /// Posts to show; empty while loading or after a failure
    pub fn preview(&self) -> &[PostSummary] {
        match &self.posts {
            PostsState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    pub fn group_error(&self) -> Option<&str> {
        match &self.group_status {
            GroupStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Action buttons are clickable: loaded and nothing running
    pub fn accepts_actions(&self) -> bool {
        self.loaded_group().is_some() && self.action_in_flight.is_none()
    }

    pub fn permitted_actions(&self) -> Vec<GroupAction> {
        self.loaded_group()
            .map(GroupDetail::permitted_actions)
            .unwrap_or_default()
    }

    /// Start a visit for `id`, dropping everything from the previous one
    pub(super) fn start_page(&mut self, id: GroupId) -> (Ticket, Ticket) {
        let tickets = Tickets {
            page: self.tickets.page + 1,
            group: self.tickets.group + 1,
            posts: self.tickets.posts + 1,
        };
        *self = GroupDetailState {
            group_id: Some(id),
            group_status: GroupStatus::Loading,
            posts: PostsState::Loading,
            tickets,
            ..GroupDetailState::default()
        };
        (
            Ticket { page: tickets.page, seq: tickets.group },
            Ticket { page: tickets.page, seq: tickets.posts },
        )
    }

    /// Re-read the current group, keeping what is already rendered
    pub(super) fn start_group_refresh(&mut self) -> Option<(GroupId, Ticket)> {
        if self.closed {
            return None;
        }
        let id = self.group_id.clone()?;
        self.tickets.group += 1;
        self.group_status = GroupStatus::Loading;
        self.confirm_pending = false;
        Some((id, Ticket { page: self.tickets.page, seq: self.tickets.group }))
    }

    pub(super) fn group_ticket_is_current(&self, ticket: Ticket) -> bool {
        !self.closed && ticket.page == self.tickets.page && ticket.seq == self.tickets.group
    }

    pub(super) fn posts_ticket_is_current(&self, ticket: Ticket) -> bool {
        !self.closed && ticket.page == self.tickets.page && ticket.seq == self.tickets.posts
    }

    pub(super) fn page_is_current(&self, page: u64) -> bool {
        !self.closed && page == self.tickets.page
    }

    pub(super) fn current_page(&self) -> u64 {
        self.tickets.page
    }

    /// Install a fresh detail and decide what happens to the coordinates.
    ///
    /// `memo` is the cached geocoding outcome for the new address, if any.
    /// Returns the address to geocode when a request has to be issued.
    pub(super) fn apply_group(
        &mut self,
        group: GroupDetail,
        memo: Option<Option<Coordinates>>,
    ) -> Option<Address> {
        let address = group.address();
        self.group = Some(group);
        self.group_status = GroupStatus::Loaded;

        if let Some(outcome) = memo {
            self.coordinates = match outcome {
                Some(coordinates) => CoordinatesState::Loaded(coordinates),
                None => CoordinatesState::Unavailable,
            };
            return None;
        }
        if self.coordinates == CoordinatesState::Loading(address.clone()) {
            return None;
        }
        self.coordinates = CoordinatesState::Loading(address.clone());
        Some(address)
    }

    pub(super) fn fail_group(&mut self, message: impl Into<String>) {
        self.group_status = GroupStatus::Failed(message.into());
        self.confirm_pending = false;
    }

    /// Apply a geocoding outcome if the page still shows `address`
    pub(super) fn apply_coordinates(&mut self, page: u64, address: &Address, outcome: Option<Coordinates>) -> bool {
        if !self.page_is_current(page) || self.coordinates != CoordinatesState::Loading(address.clone()) {
            return false;
        }
        if self.group.as_ref().map(GroupDetail::address).as_ref() != Some(address) {
            return false;
        }
        self.coordinates = match outcome {
            Some(coordinates) => CoordinatesState::Loaded(coordinates),
            None => CoordinatesState::Unavailable,
        };
        true
    }

    /// Terminal transition after a successful leave or delete
    pub(super) fn finish(&mut self) {
        self.close();
        self.action_in_flight = None;
    }

    pub(super) fn close(&mut self) {
        self.closed = true;
        self.confirm_pending = false;
        self.tickets.page += 1;
    }
}
