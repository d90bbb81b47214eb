//! Navigation
//!
//! Routing is owned by the host application. The controller only asks for a
//! [`Route`] through the [`Navigator`] seam; the egui shell receives the
//! requests over a channel and polls them once per frame.

use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

use crate::shared::GroupId;

/// Pages the detail view can send the user to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/groups`
    Groups,
    /// `/groups/{id}`
    GroupDetail(GroupId),
    /// `/groups/{id}/join`
    GroupJoin(GroupId),
    /// `/groups/{id}/edit`
    GroupEdit(GroupId),
    /// `/groups/{id}/post`
    GroupBoard(GroupId),
    /// `/groups/{id}/post/{postId}`
    GroupPost(GroupId, i64),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Groups => "/groups".to_string(),
            Route::GroupDetail(id) => format!("/groups/{}", id),
            Route::GroupJoin(id) => format!("/groups/{}/join", id),
            Route::GroupEdit(id) => format!("/groups/{}/edit", id),
            Route::GroupBoard(id) => format!("/groups/{}/post", id),
            Route::GroupPost(id, post_id) => format!("/groups/{}/post/{}", id, post_id),
        }
    }

    /// Parse a path produced by [`Route::path`]
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["groups"] => Some(Route::Groups),
            ["groups", id] => Some(Route::GroupDetail(GroupId::parse(id)?)),
            ["groups", id, "join"] => Some(Route::GroupJoin(GroupId::parse(id)?)),
            ["groups", id, "edit"] => Some(Route::GroupEdit(GroupId::parse(id)?)),
            ["groups", id, "post"] => Some(Route::GroupBoard(GroupId::parse(id)?)),
            ["groups", id, "post", post_id] => {
                Some(Route::GroupPost(GroupId::parse(id)?, post_id.parse().ok()?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Routing layer seam
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that forwards every request over an mpsc channel
pub struct ChannelNavigator {
    tx: Mutex<Sender<Route>>,
}

impl ChannelNavigator {
    /// Create the navigator and the receiving end the shell polls
    pub fn new() -> (Self, Receiver<Route>) {
        let (tx, rx) = channel();
        (Self { tx: Mutex::new(tx) }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!("[NAV] Navigating to {}", route);
        let sent = match self.tx.lock() {
            Ok(tx) => tx.send(route),
            Err(poisoned) => poisoned.into_inner().send(route),
        };
        if sent.is_err() {
            tracing::warn!("[NAV] Navigation receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> GroupId {
        GroupId::parse(raw).unwrap()
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Groups.path(), "/groups");
        assert_eq!(Route::GroupJoin(id("42")).path(), "/groups/42/join");
        assert_eq!(Route::GroupEdit(id("42")).path(), "/groups/42/edit");
        assert_eq!(Route::GroupBoard(id("42")).path(), "/groups/42/post");
        assert_eq!(Route::GroupPost(id("42"), 7).path(), "/groups/42/post/7");
    }

    #[test]
    fn test_parse_inverts_path() {
        let routes = [
            Route::Groups,
            Route::GroupDetail(id("42")),
            Route::GroupJoin(id("42")),
            Route::GroupEdit(id("42")),
            Route::GroupBoard(id("42")),
            Route::GroupPost(id("42"), 7),
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/groups/42/post/abc"), None);
        assert_eq!(Route::parse("/members"), None);
    }

    #[test]
    fn test_channel_navigator() {
        let (navigator, rx) = ChannelNavigator::new();
        navigator.navigate(Route::Groups);
        assert_eq!(rx.try_recv().unwrap(), Route::Groups);
        assert!(rx.try_recv().is_err());
    }
}
