use ordkit::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

// Simulate a record type owned by another crate.
#[derive(Debug, Clone, PartialEq)]
struct Ticket {
    id: u32,
    priority: Option<u8>,
    title: String,
}

fn tickets() -> Vec<Ticket> {
    vec![
        Ticket { id: 1, priority: Some(2), title: "login".to_string() },
        Ticket { id: 2, priority: None, title: "docs".to_string() },
        Ticket { id: 3, priority: Some(1), title: "crash".to_string() },
        Ticket { id: 4, priority: Some(2), title: "avatar".to_string() },
    ]
}

fn ticket_order() -> Comparator<'static, Ticket> {
    nulls_last(|t: &Ticket| t.priority).then(comparing(|t: &Ticket| t.title.clone()))
}

#[test]
fn test_std_sort_by_compatibility() {
    let cmp = ticket_order();
    let mut data = tickets();
    data.sort_by(cmp.as_fn());

    let ids: Vec<u32> = data.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 4, 1, 2]);
}

#[test]
fn test_unstable_sort_matches_stable_on_total_order() {
    let cmp = ticket_order();

    let mut stable = tickets();
    cmp.sort(&mut stable);
    let mut unstable = tickets();
    cmp.sort_unstable(&mut unstable);

    assert_eq!(stable, unstable);
    assert!(cmp.is_sorted(&stable));
}

#[test]
fn test_borrowed_data() {
    let titles: Vec<String> = tickets().into_iter().map(|t| t.title).collect();
    let mut borrowed: Vec<&str> = titles.iter().map(String::as_str).collect();

    // The comparator only lives as long as the data it borrows.
    let order = vec![titles[2].as_str(), titles[0].as_str()];
    in_order(order).sort(&mut borrowed);

    assert_eq!(borrowed, vec!["docs", "avatar", "crash", "login"]);
}

#[test]
fn test_comparator_for_unsized_values() {
    let cmp = natural_order::<str>().reverse();
    assert_eq!(cmp.compare("a", "b"), Ordering::Greater);

    let by_len = comparing(|s: &[u8]| s.len());
    assert_eq!(by_len.compare(b"abc", b"de"), Ordering::Greater);
}

#[test]
fn test_comparator_picks_extremes_of_grouped_values() {
    let mut groups: BTreeMap<bool, Vec<Ticket>> = BTreeMap::new();
    for ticket in tickets() {
        groups.entry(ticket.priority.is_some()).or_default().push(ticket);
    }

    let cmp = ticket_order();
    let urgent = minimum_by(&groups[&true], &cmp).map(|t| t.id);
    let least_urgent = maximum_by(&groups[&true], &cmp).map(|t| t.id);

    assert_eq!(urgent, Some(3));
    assert_eq!(least_urgent, Some(1));
}

#[test]
fn test_comparator_shared_across_threads() {
    let cmp = Arc::new(ticket_order().reverse());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cmp = Arc::clone(&cmp);
            thread::spawn(move || {
                let mut data = tickets();
                cmp.sort(&mut data);
                data.into_iter().map(|t| t.id).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![2, 1, 4, 3]);
    }
}
