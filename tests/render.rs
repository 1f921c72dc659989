#![forbid(unsafe_code)]
use insta::assert_snapshot;
use shiftplan::{assign_shifts, io, model::Staff, ScheduleConfig};

#[test]
fn text_rendering_lists_slots_in_order() {
    let mut cfg = ScheduleConfig::uniform(vec![1, 2], vec![9, 10], 1, 3);
    cfg.set_headcount(2, 10, 0);
    let staff = vec![
        Staff::new("Aiko", [1, 2], [9, 10]).unwrap().with_ability(2),
        Staff::new("Ben", [1], [9, 10]).unwrap().with_ability(2),
        Staff::new("Chika", [2], [10]).unwrap().with_ability(1),
    ];
    let results = assign_shifts(&staff, &cfg).unwrap();
    assert_snapshot!(io::render_results(&results).trim_end(), @r"
    Mon 9h: Aiko,Ben
    Mon 10h: Aiko,Ben
    Tue 9h: Aiko
    Tue 10h: Aiko,Chika
    ");
}
