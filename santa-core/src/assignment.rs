//! Giver → recipient assignments.

use crate::roster::Roster;
use crate::Participant;
use std::collections::HashSet;

/// One giver and the person they buy for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub giver: Participant,
    pub recipient: Participant,
}

/// A complete assignment over a roster, in roster order.
///
/// Every participant appears exactly once as a giver and exactly once as a
/// recipient, and nobody is their own recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pairings: Vec<Pairing>,
}

impl Assignment {
    /// Build from a permutation of roster indices: giver `i` buys for
    /// participant `permutation[i]`.
    pub(crate) fn from_permutation(roster: &Roster, permutation: &[usize]) -> Self {
        let participants = roster.participants();
        let pairings = participants
            .iter()
            .zip(permutation)
            .map(|(giver, &target)| Pairing {
                giver: giver.clone(),
                recipient: participants[target].clone(),
            })
            .collect();
        Self { pairings }
    }

    pub fn pairings(&self) -> &[Pairing] {
        &self.pairings
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Participant)> {
        self.pairings.iter().map(|p| (&p.giver, &p.recipient))
    }

    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    pub fn recipient_of(&self, giver: &Participant) -> Option<&Participant> {
        self.pairings
            .iter()
            .find(|p| &p.giver == giver)
            .map(|p| &p.recipient)
    }

    /// Width in characters of the longest recipient name.
    pub fn widest_recipient(&self) -> usize {
        self.pairings
            .iter()
            .map(|p| p.recipient.width())
            .max()
            .unwrap_or(0)
    }

    /// True when no giver is their own recipient and the recipients are
    /// exactly the givers.
    pub fn is_derangement(&self) -> bool {
        if self.pairings.iter().any(|p| p.giver == p.recipient) {
            return false;
        }
        let givers: HashSet<&Participant> = self.pairings.iter().map(|p| &p.giver).collect();
        let recipients: HashSet<&Participant> =
            self.pairings.iter().map(|p| &p.recipient).collect();
        givers.len() == self.pairings.len() && givers == recipients
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Pairing;
    type IntoIter = std::slice::Iter<'a, Pairing>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairings.iter()
    }
}
