//! Navigation state machine.
//!
//! The navigator replays BACK / FORWARD / visit commands against a
//! [`NavigationList`] of pages and records one route per navigation event.
//! Before the first visit it is `Empty` and BACK/FORWARD do nothing; after
//! that it is `Active` and always points at a live page.
//!
//! Visiting a page while not at the tail drops the forward branch, the same
//! way a browser forgets "forward" pages once you navigate somewhere new.

use super::list::{NavigationList, NodeId};
use super::url::{join_route, resolve, UrlRecord};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Back,
    Forward,
    /// Any other line, trimmed.
    Visit(String),
}

impl Command {
    /// Parses a raw input line. Surrounding whitespace is ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use navreplay::history::navigator::Command;
    ///
    /// assert_eq!(Command::parse("  BACK \n"), Command::Back);
    /// assert_eq!(Command::parse("back"), Command::Visit("back".to_string()));
    /// ```
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            "BACK" => Command::Back,
            "FORWARD" => Command::Forward,
            other => Command::Visit(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Empty,
    Active(NodeId),
}

/// Replays navigation commands and keeps the chronological route log.
#[derive(Debug)]
pub struct Navigator {
    pages: NavigationList<UrlRecord>,
    state: State,
    current_domain: Option<String>,
    log: Vec<String>,
    /// Rendered in place of the domain for pages visited before any domain.
    empty_domain: String,
    warned_missing_domain: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Creates a navigator that renders pages without a domain with an empty
    /// domain, e.g. `/a/b`.
    pub fn new() -> Self {
        Self::with_empty_domain(String::new())
    }

    /// Creates a navigator with a custom marker for pages without a domain.
    pub fn with_empty_domain(empty_domain: impl Into<String>) -> Self {
        Self {
            pages: NavigationList::new(),
            state: State::Empty,
            current_domain: None,
            log: Vec::new(),
            empty_domain: empty_domain.into(),
            warned_missing_domain: false,
        }
    }

    /// Parses and applies one input line.
    pub fn apply_line(&mut self, line: &str) {
        self.apply(Command::parse(line));
    }

    /// Applies one command.
    ///
    /// Returns the route that was logged, or `None` when BACK/FORWARD arrived
    /// before any page was visited.
    pub fn apply(&mut self, command: Command) -> Option<&str> {
        log::debug!("applying {:?}", command);
        match command {
            Command::Back => self.step(NavigationList::prev),
            Command::Forward => self.step(NavigationList::next),
            Command::Visit(token) => {
                self.visit(&token);
                self.log.last().map(String::as_str)
            }
        }
    }

    /// Moves to the neighbour chosen by `neighbour`, staying put at the
    /// boundary. The arrived page is logged either way.
    fn step(
        &mut self,
        neighbour: fn(&NavigationList<UrlRecord>, NodeId) -> Option<NodeId>,
    ) -> Option<&str> {
        let State::Active(current) = self.state else {
            log::debug!("no page visited yet, ignoring");
            return None;
        };

        let arrived = neighbour(&self.pages, current).unwrap_or(current);
        self.arrive(arrived);
        self.log.last().map(String::as_str)
    }

    fn visit(&mut self, token: &str) {
        let current_record = match self.state {
            State::Active(id) => self.pages.get(id),
            State::Empty => None,
        };
        let record = resolve(token, self.current_domain.as_deref(), current_record);

        if let State::Active(current) = self.state {
            let released = self.pages.truncate_after(current);
            if released > 0 {
                log::trace!("dropped {} forward page(s)", released);
            }
        }

        let id = self.pages.push_back(record);
        self.arrive(id);
    }

    fn arrive(&mut self, id: NodeId) {
        self.state = State::Active(id);
        let Some(record) = self.pages.get(id) else {
            return;
        };

        if let Some(domain) = &record.domain {
            self.current_domain = Some(domain.clone());
        }

        let route = match record.route() {
            Some(route) => route,
            None => {
                if !self.warned_missing_domain {
                    log::warn!(
                        "page visited before any domain, rendering domain as {:?}",
                        self.empty_domain
                    );
                    self.warned_missing_domain = true;
                }
                join_route(&self.empty_domain, &record.components)
            }
        };
        self.log.push(route);
    }

    /// Returns true once a page has been visited.
    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active(_))
    }

    /// Returns the record of the page currently being viewed.
    pub fn current(&self) -> Option<&UrlRecord> {
        match self.state {
            State::Active(id) => self.pages.get(id),
            State::Empty => None,
        }
    }

    /// Returns the sticky domain.
    pub fn current_domain(&self) -> Option<&str> {
        self.current_domain.as_deref()
    }

    /// Returns the routes logged so far, oldest first.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Returns the list of pages reachable by BACK/FORWARD.
    pub fn pages(&self) -> &NavigationList<UrlRecord> {
        &self.pages
    }

    /// Consumes the navigator and returns the full route log in the order
    /// the events happened.
    pub fn finish(self) -> Vec<String> {
        self.log
    }
}
