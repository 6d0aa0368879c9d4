// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Exact actuator sequences produced by the encoder on the default geometry.
//!
//! Reference numbers: pre-roll 97°, rows at 89°, 85°, 81°, …, lift up 89° / down 102°,
//! 80 ms lift settle, 20 ms pen delay, 400 ms pre-roll hold, 9 feed steps per column.

mod common;

use common::*;
use minitelegraph::config::PrinterConfig;
use minitelegraph::error::{ConfigError, RenderError};
use minitelegraph::font::GlyphTable;
use pretty_assertions::assert_eq;

const UP: u8 = 89;
const DOWN: u8 = 102;
const PREROLL: u8 = 97;

#[test]
fn empty_column_only_prerolls_and_feeds() {
    let (mut r, calls) = ascii_renderer();
    r.render_column(0).unwrap();
    assert_eq!(drain(&calls), vec![Call::Pen(PREROLL), Call::Feed(9)]);
}

#[test]
fn empty_column_twice_repeats_the_same_commands() {
    let (mut r, calls) = ascii_renderer();
    r.render_column(0).unwrap();
    r.render_column(0).unwrap();
    assert_eq!(
        drain(&calls),
        vec![
            Call::Pen(PREROLL),
            Call::Feed(9),
            Call::Pen(PREROLL),
            Call::Feed(9)
        ]
    );
}

#[test]
fn column_is_scanned_bottom_row_first() {
    let (mut r, calls) = ascii_renderer();
    r.render_column(0b101).unwrap();
    assert_eq!(
        drain(&calls),
        vec![
            Call::Pen(PREROLL),
            Call::Pen(PREROLL),
            Call::DelayMs(400),
            // row 0: dot
            Call::Lift(UP),
            Call::DelayMs(80),
            Call::Pen(89),
            Call::DelayMs(20),
            // row 1: gap
            Call::Lift(DOWN),
            Call::DelayMs(80),
            Call::Pen(85),
            Call::DelayMs(20),
            // row 2: dot
            Call::Lift(UP),
            Call::DelayMs(80),
            Call::Pen(81),
            Call::DelayMs(20),
            // retract
            Call::Lift(DOWN),
            Call::DelayMs(80),
            Call::Feed(9),
        ]
    );
}

#[test]
fn sweep_stops_after_the_highest_set_bit() {
    let (mut r, calls) = ascii_renderer();
    r.render_column(0b1000_0000).unwrap();
    let calls = drain(&calls);

    let mut expected = vec![DOWN; 7];
    expected.push(UP);
    expected.push(DOWN);
    assert_eq!(lift_angles(&calls), expected);
    assert_eq!(feeds(&calls), 1);
}

#[test]
fn full_column_reaches_the_top_row_inside_the_pen_range() {
    let (mut r, calls) = ascii_renderer();
    r.render_column(0xFF).unwrap();
    let angles = pen_angles(&drain(&calls));

    assert_eq!(angles, vec![97, 97, 89, 85, 81, 77, 73, 69, 65, 61]);
    assert!(angles.iter().all(|a| (55..=105).contains(a)));
}

#[test]
fn blank_glyph_is_eight_bare_feeds() {
    let (mut r, calls) = ascii_renderer();
    r.render_char(b' ').unwrap();
    assert_eq!(drain(&calls), vec![Call::Feed(9); 8]);
}

#[test]
fn unknown_codes_print_blank() {
    let (mut r, calls) = ascii_renderer();
    for code in [0x00, 0x7F, 0x80, 0xFF] {
        r.render_char(code).unwrap();
        assert_eq!(drain(&calls), vec![Call::Feed(9); 8], "code {code:#04x}");
    }
}

#[test]
fn empty_columns_inside_a_glyph_skip_the_pen() {
    let (mut r, calls) = ascii_renderer();
    r.render_char(b'L').unwrap();
    let calls = drain(&calls);

    // Five inked columns, each with a doubled pre-roll.
    assert_eq!(feeds(&calls), 8);
    assert_eq!(
        pen_angles(&calls).iter().filter(|&&a| a == PREROLL).count(),
        10
    );
    assert_eq!(calls.first(), Some(&Call::Feed(9)));
    assert_eq!(&calls[calls.len() - 2..], &[Call::Feed(9), Call::Feed(9)]);
}

#[test]
fn every_glyph_ends_with_the_tape_retracted() {
    let (mut r, calls) = ascii_renderer();
    for code in b'!'..=b'~' {
        r.render_char(code).unwrap();
        let lifts = lift_angles(&drain(&calls));
        assert_eq!(lifts.last(), Some(&DOWN), "{:?}", code as char);
    }
}

#[test]
fn strings_are_glyphs_back_to_back() {
    let (mut joined, joined_calls) = ascii_renderer();
    joined.render_string(b"AB").unwrap();

    let (mut single, single_calls) = ascii_renderer();
    single.render_char(b'A').unwrap();
    single.render_char(b'B').unwrap();

    assert_eq!(drain(&joined_calls), drain(&single_calls));
}

#[test]
fn empty_string_does_nothing() {
    let (mut r, calls) = ascii_renderer();
    r.render_string(b"").unwrap();
    assert!(drain(&calls).is_empty());
}

#[test]
fn job_attaches_retracts_and_parks_the_pen() {
    let (mut r, calls) = ascii_renderer();
    let job = r.begin_job().unwrap();
    job.finish().unwrap();

    assert_eq!(
        drain(&calls),
        vec![
            Call::Attach,
            Call::Lift(DOWN),
            Call::DelayMs(80),
            Call::Pen(80),
            Call::Detach
        ]
    );
}

#[test]
fn dropping_a_job_detaches() {
    let (mut r, calls) = ascii_renderer();
    {
        let mut job = r.begin_job().unwrap();
        job.render_column(0).unwrap();
    }
    assert_eq!(drain(&calls).last(), Some(&Call::Detach));
}

#[test]
fn detach_failure_is_reported_by_finish() {
    let (mut r, calls) = ascii_renderer();
    r.actuators_mut().fail_detach = true;

    let job = r.begin_job().unwrap();
    assert_eq!(job.finish(), Err(Fault));

    let detaches = drain(&calls)
        .into_iter()
        .filter(|c| *c == Call::Detach)
        .count();
    assert_eq!(detaches, 1);
}

#[test]
fn actuator_fault_stops_rendering_and_releases() {
    let (mut r, calls) = ascii_renderer();
    // begin_job uses two motions, the pre-roll a third.
    r.actuators_mut().fail_after = Some(3);

    {
        let mut job = r.begin_job().unwrap();
        assert_eq!(job.render_column(0b1), Err(RenderError::Actuator(Fault)));
    }

    assert_eq!(
        drain(&calls),
        vec![
            Call::Attach,
            Call::Lift(DOWN),
            Call::DelayMs(80),
            Call::Pen(80),
            Call::Pen(PREROLL),
            Call::Detach
        ]
    );
}

#[test]
fn failed_job_start_detaches_again() {
    let (mut r, calls) = ascii_renderer();
    r.actuators_mut().fail_after = Some(0);

    assert!(r.begin_job().is_err());
    assert_eq!(drain(&calls), vec![Call::Attach, Call::Detach]);
}

#[test]
fn column_taller_than_the_geometry_is_rejected_before_moving() {
    let geometry = PrinterConfig {
        max_dot_rows: 4,
        ..PrinterConfig::DEFAULT
    }
    .validate()
    .unwrap();
    let (mut r, calls) = renderer_with(geometry, TestFont::default());

    assert_eq!(
        r.render_column(0x80),
        Err(RenderError::ColumnTooTall {
            mask: 0x80,
            max_dot_rows: 4
        })
    );
    assert_eq!(
        r.render_column(0x10),
        Err(RenderError::ColumnTooTall {
            mask: 0x10,
            max_dot_rows: 4
        })
    );
    assert!(drain(&calls).is_empty());

    r.render_column(0x0F).unwrap();
    let calls = drain(&calls);
    assert_eq!(lift_angles(&calls).len(), 5);
    assert_eq!(calls.last(), Some(&Call::Feed(9)));
}

#[test]
fn glyph_table_taller_than_the_geometry_is_rejected() {
    let geometry = PrinterConfig {
        max_dot_rows: 7,
        ..PrinterConfig::DEFAULT
    }
    .validate()
    .unwrap();
    let font = TestFont::default().with(b'X', [0, 0x80, 0, 0, 0, 0, 0, 0]);
    assert_eq!(font.dot_rows(), 8);

    let calls = Recording::default();
    let result = minitelegraph::render::Renderer::new(
        geometry,
        MockActuators::new(calls.clone()),
        MockDelay::new(calls.clone()),
        font,
    );
    assert_eq!(
        result.err(),
        Some(ConfigError::GlyphTooTall {
            rows: 8,
            max_dot_rows: 7
        })
    );
}

#[test]
fn custom_tables_are_rendered_as_given() {
    let font = TestFont::default().with(b'|', [0, 0b1, 0, 0, 0, 0, 0, 0]);
    let (mut r, calls) = renderer_with(default_geometry(), font);

    r.render_char(b'|').unwrap();
    let calls = drain(&calls);
    assert_eq!(feeds(&calls), 8);
    assert_eq!(lift_angles(&calls), vec![UP, DOWN]);
    assert_eq!(pen_angles(&calls), vec![PREROLL, PREROLL, 89]);
}
