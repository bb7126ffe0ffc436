use daygrid_core::{merge, Event, EventGroup, EventValidationError, ValidationError};

#[test]
fn three_overlapping_events_form_one_group() {
    let events = vec![Event::new(0, 1, 2), Event::new(1, 2, 3), Event::new(3, 1, 3)];

    let groups = merge(events).unwrap();
    assert_eq!(
        groups,
        vec![EventGroup {
            id: 0,
            events: vec![Event::new(0, 1, 2), Event::new(3, 1, 3), Event::new(1, 2, 3)],
            start: 1,
            end: 3,
        }]
    );
}

#[test]
fn isolated_event_and_cluster_split_into_two_groups() {
    let events = vec![
        Event::new(0, 30, 150),
        Event::new(1, 540, 600),
        Event::new(2, 560, 620),
        Event::new(3, 610, 670),
    ];

    let groups = merge(events).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].id, groups[0].start, groups[0].end), (0, 30, 150));
    assert_eq!(groups[0].len(), 1);
    assert_eq!((groups[1].id, groups[1].start, groups[1].end), (1, 540, 670));
    let ids: Vec<u32> = groups[1].events.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn touching_events_stay_in_separate_groups() {
    let groups = merge(vec![Event::new(0, 0, 30), Event::new(1, 30, 60)]).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].end, 30);
    assert_eq!(groups[1].start, 30);
}

#[test]
fn groups_come_back_in_time_order_for_unsorted_input() {
    let groups = merge(vec![
        Event::new(0, 600, 700),
        Event::new(1, 0, 45),
        Event::new(2, 300, 360),
        Event::new(3, 20, 90),
    ])
    .unwrap();

    let envelopes: Vec<(i32, i32)> = groups.iter().map(|group| (group.start, group.end)).collect();
    assert_eq!(envelopes, vec![(0, 90), (300, 360), (600, 700)]);
    for pair in groups.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
}

#[test]
fn full_day_event_absorbs_everything() {
    let groups = merge(vec![
        Event::new(0, 100, 130),
        Event::new(1, 0, 720),
        Event::new(2, 700, 720),
    ])
    .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!((groups[0].start, groups[0].end), (0, 720));
    assert_eq!(groups[0].len(), 3);
}

#[test]
fn empty_input_is_not_an_error() {
    assert_eq!(merge(Vec::new()).unwrap(), Vec::<EventGroup>::new());
}

#[test]
fn negative_start_is_rejected() {
    let err = merge(vec![Event::new(0, -1, 5)]).unwrap_err();
    assert_eq!(
        err,
        ValidationError {
            event_id: 0,
            reason: EventValidationError::StartBeforeDayStart { start: -1 },
        }
    );
    assert!(err.to_string().starts_with("invalid events"));
}

#[test]
fn zero_duration_is_rejected() {
    let err = merge(vec![Event::new(0, 5, 5)]).unwrap_err();
    assert_eq!(err.reason, EventValidationError::EmptyWindow { start: 5, end: 5 });
}

#[test]
fn one_bad_event_rejects_the_whole_call() {
    let err = merge(vec![
        Event::new(0, 0, 30),
        Event::new(1, 60, 90),
        Event::new(2, 650, 730),
    ])
    .unwrap_err();
    assert_eq!(err.event_id, 2);
}
