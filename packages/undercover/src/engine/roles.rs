use rand::Rng;
use std::collections::HashSet;

use crate::error::GameError;
use crate::models::{PlayerEntry, Role};

/// Trims every name and rejects empty or case-insensitively repeated ones.
pub fn validate_names(entries: &[PlayerEntry]) -> Result<Vec<String>, GameError> {
    let names: Vec<String> = entries.iter().map(|e| e.name.trim().to_string()).collect();

    if let Some(index) = names.iter().position(|n| n.is_empty()) {
        return Err(GameError::EmptyName { index });
    }

    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.to_lowercase()) {
            return Err(GameError::DuplicateName { name: name.clone() });
        }
    }

    Ok(names)
}

/// Deals one role per player. The pool holds `villagers, spies, whites`
/// tokens and player `i` draws uniformly from what is left after players
/// `0..i` have drawn.
pub fn assign_roles<R: Rng + ?Sized>(
    player_count: usize,
    spy_count: usize,
    white_count: usize,
    rng: &mut R,
) -> Vec<Role> {
    let villagers = player_count.saturating_sub(spy_count + white_count);
    let mut pool = Vec::with_capacity(player_count);
    pool.extend(std::iter::repeat(Role::Villager).take(villagers));
    pool.extend(std::iter::repeat(Role::Spy).take(spy_count));
    pool.extend(std::iter::repeat(Role::White).take(white_count));

    let mut roles = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let pick = rng.gen_range(0..pool.len());
        roles.push(pool.remove(pick));
    }
    roles
}

/// Picks the double agent uniformly over all seats, independent of roles.
pub fn pick_double_agent<R: Rng + ?Sized>(
    enabled: bool,
    player_count: usize,
    rng: &mut R,
) -> Option<usize> {
    (enabled && player_count > 0).then(|| rng.gen_range(0..player_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entries(names: &[&str]) -> Vec<PlayerEntry> {
        names
            .iter()
            .map(|n| PlayerEntry::new(*n, Gender::Male))
            .collect()
    }

    #[test]
    fn names_are_trimmed() {
        let names = validate_names(&entries(&["  Ana ", "Bor", "Cene"])).unwrap();
        assert_eq!(names, vec!["Ana", "Bor", "Cene"]);
    }

    #[test]
    fn blank_name_is_rejected_with_its_index() {
        let result = validate_names(&entries(&["Ana", "   ", "Cene"]));
        assert_eq!(result, Err(GameError::EmptyName { index: 1 }));
    }

    #[test]
    fn duplicate_names_ignore_case() {
        let result = validate_names(&entries(&["Ana", "bor", " BOR"]));
        assert_eq!(
            result,
            Err(GameError::DuplicateName {
                name: "BOR".to_string()
            })
        );
    }

    #[test]
    fn pool_matches_configuration() {
        let mut rng = StdRng::seed_from_u64(7);
        for seed_round in 0..50 {
            let roles = assign_roles(9, 2, 2, &mut rng);
            assert_eq!(roles.len(), 9, "round {}", seed_round);
            assert_eq!(roles.iter().filter(|r| **r == Role::Spy).count(), 2);
            assert_eq!(roles.iter().filter(|r| **r == Role::White).count(), 2);
            assert_eq!(roles.iter().filter(|r| **r == Role::Villager).count(), 5);
        }
    }

    #[test]
    fn same_seed_deals_same_roles() {
        let a = assign_roles(6, 1, 1, &mut StdRng::seed_from_u64(42));
        let b = assign_roles(6, 1, 1, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_seat_can_draw_the_spy() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut spy_seats = HashSet::new();
        for _ in 0..500 {
            let roles = assign_roles(5, 1, 0, &mut rng);
            spy_seats.insert(roles.iter().position(|r| *r == Role::Spy).unwrap());
        }
        assert_eq!(spy_seats.len(), 5);
    }

    #[test]
    fn double_agent_only_when_enabled() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_double_agent(false, 6, &mut rng), None);
        let picked = pick_double_agent(true, 6, &mut rng).unwrap();
        assert!(picked < 6);
    }
}
