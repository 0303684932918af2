//! Ancestry queries and subtree traversal on an in-memory bloodline.

use bloodline::domain::{Bloodline, Vampire, VampireId};
use bloodline::util::testing;
use rstest::{fixture, rstest};

struct Family {
    bloodline: Bloodline,
    ansel: VampireId,
    sarah: VampireId,
    andrew: VampireId,
    mary: VampireId,
}

// Ansel (1500)
// └── Sarah (1600)
//     ├── Andrew (1980)
//     └── Mary (1985)
#[fixture]
fn family() -> Family {
    testing::init_test_setup();
    let mut bloodline = Bloodline::new();
    let ansel = bloodline.insert(Vampire::new("Ansel", 1500));
    let sarah = bloodline.insert(Vampire::new("Sarah", 1600));
    let andrew = bloodline.insert(Vampire::new("Andrew", 1980));
    let mary = bloodline.insert(Vampire::new("Mary", 1985));
    bloodline.add_offspring(ansel, sarah).unwrap();
    bloodline.add_offspring(sarah, andrew).unwrap();
    bloodline.add_offspring(sarah, mary).unwrap();
    Family {
        bloodline,
        ansel,
        sarah,
        andrew,
        mary,
    }
}

struct Clan {
    bloodline: Bloodline,
    ansel: VampireId,
    sarah: VampireId,
    andrew: VampireId,
    first_mary: VampireId,
    elijah: VampireId,
    second_mary: VampireId,
    lucas: VampireId,
}

// Ansel (1500)
// ├── Sarah (1600)
// │   ├── Andrew (1980)
// │   └── Mary (1985)
// └── Elijah (1700)
//     └── Mary (2001)
//         └── Lucas (2010)
#[fixture]
fn clan() -> Clan {
    testing::init_test_setup();
    let mut bloodline = Bloodline::new();
    let ansel = bloodline.insert(Vampire::new("Ansel", 1500));
    let sarah = bloodline.insert(Vampire::new("Sarah", 1600));
    let elijah = bloodline.insert(Vampire::new("Elijah", 1700));
    let andrew = bloodline.insert(Vampire::new("Andrew", 1980));
    let first_mary = bloodline.insert(Vampire::new("Mary", 1985));
    let second_mary = bloodline.insert(Vampire::new("Mary", 2001));
    let lucas = bloodline.insert(Vampire::new("Lucas", 2010));
    bloodline.add_offspring(ansel, sarah).unwrap();
    bloodline.add_offspring(ansel, elijah).unwrap();
    bloodline.add_offspring(sarah, andrew).unwrap();
    bloodline.add_offspring(sarah, first_mary).unwrap();
    bloodline.add_offspring(elijah, second_mary).unwrap();
    bloodline.add_offspring(second_mary, lucas).unwrap();
    Clan {
        bloodline,
        ansel,
        sarah,
        andrew,
        first_mary,
        elijah,
        second_mary,
        lucas,
    }
}

fn names(bloodline: &Bloodline, ids: &[VampireId]) -> Vec<String> {
    ids.iter()
        .map(|&idx| bloodline.vampire(idx).unwrap().name().to_string())
        .collect()
}

// ============================================================
// Construction
// ============================================================

#[rstest]
fn given_family_when_linking_then_links_are_bidirectional(family: Family) {
    let b = &family.bloodline;
    assert_eq!(b.creator(family.sarah).unwrap(), Some(family.ansel));
    assert_eq!(b.offspring(family.ansel).unwrap(), &[family.sarah]);
    assert_eq!(b.offspring(family.sarah).unwrap(), &[family.andrew, family.mary]);
    assert_eq!(b.creator(family.ansel).unwrap(), None);
    assert_eq!(b.roots(), vec![family.ansel]);
    assert_eq!(b.len(), 4);
}

#[rstest]
fn given_family_when_counting_offspring_then_only_direct_children(family: Family) {
    let b = &family.bloodline;
    assert_eq!(b.offspring_count(family.ansel).unwrap(), 1);
    assert_eq!(b.offspring_count(family.sarah).unwrap(), 2);
    assert_eq!(b.offspring_count(family.andrew).unwrap(), 0);
}

// ============================================================
// Depth and seniority
// ============================================================

#[rstest]
#[case::root("ansel", 0)]
#[case::child("sarah", 1)]
#[case::grandchild("andrew", 2)]
#[case::grandchild_sibling("mary", 2)]
fn given_family_when_measuring_depth_then_counts_creator_links(
    family: Family,
    #[case] who: &str,
    #[case] expected: usize,
) {
    let idx = match who {
        "ansel" => family.ansel,
        "sarah" => family.sarah,
        "andrew" => family.andrew,
        _ => family.mary,
    };
    assert_eq!(family.bloodline.depth_from_root(idx).unwrap(), expected);
}

#[rstest]
fn given_clan_then_child_depth_is_creator_depth_plus_one(clan: Clan) {
    let b = &clan.bloodline;
    for root in b.roots() {
        for (idx, node) in b.iter_preorder(root).unwrap() {
            match node.creator {
                None => assert_eq!(b.depth_from_root(idx).unwrap(), 0),
                Some(creator) => assert_eq!(
                    b.depth_from_root(idx).unwrap(),
                    b.depth_from_root(creator).unwrap() + 1
                ),
            }
        }
    }
}

#[rstest]
fn given_family_when_comparing_seniority_then_strictly_by_depth(family: Family) {
    let b = &family.bloodline;
    assert!(b.is_more_senior_than(family.ansel, family.sarah).unwrap());
    assert!(b.is_more_senior_than(family.sarah, family.mary).unwrap());
    assert!(!b.is_more_senior_than(family.mary, family.sarah).unwrap());
}

#[rstest]
fn given_siblings_of_equal_depth_then_neither_is_more_senior(family: Family) {
    let b = &family.bloodline;
    assert!(!b.is_more_senior_than(family.andrew, family.mary).unwrap());
    assert!(!b.is_more_senior_than(family.mary, family.andrew).unwrap());
    assert!(!b.is_more_senior_than(family.ansel, family.ansel).unwrap());
}

#[rstest]
fn given_cousins_in_different_branches_then_seniority_still_by_depth(clan: Clan) {
    let b = &clan.bloodline;
    // Elijah (depth 1) vs Andrew (depth 2) in a different branch
    assert!(b.is_more_senior_than(clan.elijah, clan.andrew).unwrap());
    assert!(!b.is_more_senior_than(clan.lucas, clan.andrew).unwrap());
}

#[rstest]
fn given_clan_when_walking_ancestors_then_nearest_first(clan: Clan) {
    let ancestors: Vec<_> = clan.bloodline.ancestors(clan.lucas).unwrap().collect();
    assert_eq!(ancestors, vec![clan.second_mary, clan.elijah, clan.ansel]);
    assert_eq!(clan.bloodline.ancestors(clan.ansel).unwrap().count(), 0);
}

// ============================================================
// Closest common ancestor
// ============================================================

#[rstest]
fn given_root_and_child_then_root_is_closest_common_ancestor(family: Family) {
    let b = &family.bloodline;
    assert_eq!(
        b.closest_common_ancestor(family.ansel, family.sarah).unwrap(),
        Some(family.ansel)
    );
    assert_eq!(
        b.closest_common_ancestor(family.sarah, family.ansel).unwrap(),
        Some(family.ansel)
    );
}

#[rstest]
fn given_root_and_grandchild_then_root_is_closest_common_ancestor(family: Family) {
    assert_eq!(
        family
            .bloodline
            .closest_common_ancestor(family.ansel, family.andrew)
            .unwrap(),
        Some(family.ansel)
    );
}

#[rstest]
fn given_same_vampire_twice_then_it_is_its_own_closest_common_ancestor(family: Family) {
    assert_eq!(
        family
            .bloodline
            .closest_common_ancestor(family.mary, family.mary)
            .unwrap(),
        Some(family.mary)
    );
}

#[rstest]
fn given_siblings_then_creator_is_closest_common_ancestor(family: Family) {
    assert_eq!(
        family
            .bloodline
            .closest_common_ancestor(family.andrew, family.mary)
            .unwrap(),
        Some(family.sarah)
    );
}

#[rstest]
fn given_cousins_at_different_depths_then_shared_root_is_found(clan: Clan) {
    let b = &clan.bloodline;
    assert_eq!(
        b.closest_common_ancestor(clan.lucas, clan.andrew).unwrap(),
        Some(clan.ansel)
    );
    assert_eq!(
        b.closest_common_ancestor(clan.first_mary, clan.lucas).unwrap(),
        Some(clan.ansel)
    );
    assert_eq!(
        b.closest_common_ancestor(clan.lucas, clan.elijah).unwrap(),
        Some(clan.elijah)
    );
}

#[rstest]
fn given_disjoint_trees_then_no_common_ancestor(mut family: Family) {
    let b = &mut family.bloodline;
    let dracula = b.insert(Vampire::new("Dracula", 1400));
    let vlad = b.insert(Vampire::new("Vlad", 1450));
    b.add_offspring(dracula, vlad).unwrap();

    assert_eq!(b.closest_common_ancestor(vlad, family.mary).unwrap(), None);
    assert_eq!(b.closest_common_ancestor(dracula, family.ansel).unwrap(), None);
    assert_eq!(b.roots(), vec![family.ansel, dracula]);
}

// ============================================================
// Subtree traversal
// ============================================================

#[rstest]
fn given_family_when_iterating_then_pre_order(family: Family) {
    let order: Vec<_> = family
        .bloodline
        .iter_preorder(family.ansel)
        .unwrap()
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(
        order,
        vec![family.ansel, family.sarah, family.andrew, family.mary]
    );
}

#[rstest]
fn given_clan_when_iterating_then_each_branch_finishes_before_next_sibling(clan: Clan) {
    let order: Vec<_> = clan
        .bloodline
        .iter_preorder(clan.ansel)
        .unwrap()
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(
        order,
        vec![
            clan.ansel,
            clan.sarah,
            clan.andrew,
            clan.first_mary,
            clan.elijah,
            clan.second_mary,
            clan.lucas
        ]
    );
}

#[rstest]
fn given_family_when_counting_descendants_then_excludes_self(family: Family) {
    let b = &family.bloodline;
    assert_eq!(b.count_descendants(family.ansel).unwrap(), 3);
    assert_eq!(b.count_descendants(family.sarah).unwrap(), 2);
    assert_eq!(b.count_descendants(family.andrew).unwrap(), 0);
}

#[rstest]
fn given_name_present_when_finding_then_returns_match(family: Family) {
    let b = &family.bloodline;
    assert_eq!(b.find_by_name(family.ansel, "Mary").unwrap(), Some(family.mary));
    assert_eq!(b.find_by_name(family.ansel, "Ansel").unwrap(), Some(family.ansel));
}

#[rstest]
fn given_name_absent_when_finding_then_none(family: Family) {
    let b = &family.bloodline;
    assert_eq!(b.find_by_name(family.ansel, "Lestat").unwrap(), None);
    // search does not look above the starting vampire
    assert_eq!(b.find_by_name(family.sarah, "Ansel").unwrap(), None);
}

#[rstest]
fn given_duplicate_names_when_finding_then_first_in_pre_order_wins(clan: Clan) {
    let b = &clan.bloodline;
    assert_eq!(b.find_by_name(clan.ansel, "Mary").unwrap(), Some(clan.first_mary));
    assert_eq!(b.find_by_name(clan.elijah, "Mary").unwrap(), Some(clan.second_mary));
}

#[rstest]
fn given_year_predicate_when_collecting_then_strictly_after_1980(family: Family) {
    let b = &family.bloodline;
    let recent = b
        .collect_where(family.ansel, |v| v.converted_year() > 1980)
        .unwrap();
    assert_eq!(recent, vec![family.mary]);
}

#[rstest]
fn given_predicate_matching_nothing_when_collecting_then_empty(family: Family) {
    let none = family
        .bloodline
        .collect_where(family.ansel, |v| v.converted_year() > 3000)
        .unwrap();
    assert!(none.is_empty());
}

#[rstest]
fn given_predicate_when_collecting_then_equals_filtered_pre_order(clan: Clan) {
    let b = &clan.bloodline;
    let predicate = |v: &Vampire| v.name().len() <= 5;

    let collected = b.collect_where(clan.ansel, predicate).unwrap();
    let filtered: Vec<_> = b
        .iter_preorder(clan.ansel)
        .unwrap()
        .filter(|(_, node)| predicate(&node.data))
        .map(|(idx, _)| idx)
        .collect();

    assert_eq!(collected, filtered);
    assert_eq!(
        names(b, &collected),
        vec!["Ansel", "Sarah", "Mary", "Mary", "Lucas"]
    );
}

#[rstest]
fn given_collect_from_inner_vampire_then_includes_itself(clan: Clan) {
    let everyone = clan.bloodline.collect_where(clan.elijah, |_| true).unwrap();
    assert_eq!(everyone, vec![clan.elijah, clan.second_mary, clan.lucas]);
}
