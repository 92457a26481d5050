//! End-to-end widget flows through the event-level driver.

use webcalc::widget::{WidgetDriver, CLEAR_HISTORY_ID, DISPLAY_ID, HISTORY_ID, RECOVER_ID};

fn evaluate(driver: &mut WidgetDriver, expression: &str) {
    driver.set_input(expression);
    driver.press_key("Enter");
}

// ===== Evaluation flows =====

#[test]
fn typed_expression_evaluates_with_precedence() {
    let mut d = WidgetDriver::new();
    d.type_text("2+3*4");
    d.press_key("Enter");
    assert_eq!(d.display_text(), "14");
}

#[test]
fn parenthesized_expression() {
    let mut d = WidgetDriver::new();
    d.type_text("(2+3)*4");
    d.press_key("Enter");
    assert_eq!(d.display_text(), "20");
}

#[test]
fn percentage_shorthand_records_rewritten_expression() {
    let mut d = WidgetDriver::new();
    d.type_text("50%");
    d.press_key("Enter");
    assert_eq!(d.display_text(), "0.5");
    let row = &d.dom().get(HISTORY_ID).unwrap().children[0];
    assert_eq!(row.text, "(50/100) = 0.5");
}

#[test]
fn percentage_of_a_value() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "200*15%");
    assert_eq!(d.display_text(), "30");
}

#[test]
fn mod_shorthand_via_keypad() {
    let mut d = WidgetDriver::new();
    d.click("btn-1");
    d.click("btn-0");
    d.click("btn-mod");
    d.click("btn-3");
    d.click("btn-equals");
    assert_eq!(d.display_text(), "1");
    let row = &d.dom().get(HISTORY_ID).unwrap().children[0];
    assert_eq!(row.text, "10 % 3 = 1");
}

#[test]
fn malformed_expression_shows_error_and_skips_history() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "2++3");
    assert_eq!(d.display_text(), "Error");
    assert!(d.widget().history().is_empty());
}

#[test]
fn division_by_zero_shows_error() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1/0");
    assert_eq!(d.display_text(), "Error");
    assert!(d.widget().history().is_empty());
}

#[test]
fn empty_display_evaluates_to_error() {
    let mut d = WidgetDriver::new();
    d.press_key("Enter");
    assert_eq!(d.display_text(), "Error");
}

// ===== Square flows =====

#[test]
fn square_replaces_display_without_history() {
    let mut d = WidgetDriver::new();
    d.set_input("12");
    d.click("btn-square");
    assert_eq!(d.display_text(), "144");
    assert!(d.widget().history().is_empty());
}

#[test]
fn square_of_non_number_is_error() {
    let mut d = WidgetDriver::new();
    d.set_input("5+3");
    d.click("btn-square");
    assert_eq!(d.display_text(), "Error");
    assert!(d.widget().history().is_empty());
}

// ===== Input guard flows =====

#[test]
fn operator_after_operator_is_dropped() {
    let mut d = WidgetDriver::new();
    d.type_text("5+");
    d.click("btn-times");
    assert_eq!(d.display_text(), "5+");
}

#[test]
fn direct_edit_is_stripped() {
    let mut d = WidgetDriver::new();
    d.set_input("1a+2b=");
    assert_eq!(d.display_text(), "1+2");
}

#[test]
fn paste_with_disallowed_char_is_rejected_wholesale() {
    let mut d = WidgetDriver::new();
    d.type_text("1+");
    assert!(!d.paste("2a"));
    assert_eq!(d.display_text(), "1+");
}

#[test]
fn clean_paste_is_accepted() {
    let mut d = WidgetDriver::new();
    d.type_text("1+");
    assert!(d.paste("(2*3)"));
    assert_eq!(d.display_text(), "1+(2*3)");
    d.press_key("Enter");
    assert_eq!(d.display_text(), "7");
}

#[test]
fn backspace_and_delete_keys() {
    let mut d = WidgetDriver::new();
    d.type_text("123");
    d.press_key("Backspace");
    assert_eq!(d.display_text(), "12");
    d.press_key("Delete");
    assert_eq!(d.display_text(), "");
}

// ===== History removal and recovery =====

#[test]
fn remove_then_recover_restores_exactly_the_removed_entry() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    evaluate(&mut d, "2*3");
    d.click("history-remove-1");
    assert_eq!(d.widget().history().len(), 1);
    assert!(!d.dom().get(RECOVER_ID).unwrap().is_disabled());

    d.click(RECOVER_ID);
    // Recovery replaces the log with the buffer: just the removed entry.
    assert_eq!(d.widget().history().len(), 1);
    assert_eq!(d.widget().history().get(0).unwrap().expression, "1+1");
    assert!(d.dom().get(RECOVER_ID).unwrap().is_disabled());
}

#[test]
fn successive_removals_accumulate_and_recover_together() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    evaluate(&mut d, "2*3");
    evaluate(&mut d, "9-4");
    // Two single removals append to the same recovery buffer.
    d.click("history-remove-0");
    d.click("history-remove-0");
    assert_eq!(d.widget().history().len(), 1);

    d.click(RECOVER_ID);
    // Both removed entries return, in removal order.
    let rows = &d.dom().get(HISTORY_ID).unwrap().children;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text, "9-4 = 5");
    assert_eq!(rows[1].text, "2*3 = 6");
    assert!(d.dom().get(RECOVER_ID).unwrap().is_disabled());
}

#[test]
fn confirmed_clear_snapshots_and_recovers_in_order() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    evaluate(&mut d, "2*3");
    evaluate(&mut d, "9-4");
    d.click(CLEAR_HISTORY_ID);
    assert!(d.widget().history().is_empty());
    assert_eq!(d.display_text(), "");
    assert_eq!(d.dom().get(HISTORY_ID).unwrap().children.len(), 0);

    d.click(RECOVER_ID);
    let rows = &d.dom().get(HISTORY_ID).unwrap().children;
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].text, "9-4 = 5");
    assert_eq!(rows[1].text, "2*3 = 6");
    assert_eq!(rows[2].text, "1+1 = 2");
}

#[test]
fn declined_clear_is_a_full_noop() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    d.gate_mut().push_answer(false);
    d.click(CLEAR_HISTORY_ID);
    assert_eq!(d.widget().history().len(), 1);
    assert_eq!(d.display_text(), "2");
    assert!(d.dom().get(RECOVER_ID).unwrap().is_disabled());
}

#[test]
fn clear_discards_earlier_single_removal() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    evaluate(&mut d, "2*3");
    d.click("history-remove-0");
    d.click(CLEAR_HISTORY_ID);
    d.click(RECOVER_ID);
    // Only the snapshot of the clear survives.
    assert_eq!(d.widget().history().len(), 1);
    assert_eq!(d.widget().history().get(0).unwrap().expression, "1+1");
}

// ===== History navigation =====

#[test]
fn prev_and_next_walk_the_log() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    evaluate(&mut d, "2*3");
    d.click("btn-history-prev");
    assert_eq!(d.display_text(), "1+1");
    d.click("btn-history-next");
    assert_eq!(d.display_text(), "2*3");
    d.click("btn-history-next");
    assert_eq!(d.display_text(), "");
    d.click("btn-history-prev");
    assert_eq!(d.display_text(), "2*3");
}

#[test]
fn arrow_keys_navigate_history() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "6*7");
    // Evaluation leaves the newest entry selected; down deselects and
    // blanks, up then reselects it.
    d.press_key("ArrowDown");
    assert_eq!(d.display_text(), "");
    d.press_key("ArrowUp");
    assert_eq!(d.display_text(), "6*7");
}

#[test]
fn history_row_click_recalls_after_the_handler() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "6*7");
    d.set_input("99");
    d.click("history-0");
    // The handler only clears; the recall lands on the next tick.
    assert_eq!(d.display_text(), "");
    assert!(d.flush_deferred());
    assert_eq!(d.display_text(), "6*7");
    assert!(!d.flush_deferred());
}

#[test]
fn recalled_expression_can_be_reevaluated() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "6*7");
    d.click("history-0");
    d.flush_deferred();
    d.press_key("Enter");
    assert_eq!(d.display_text(), "42");
    assert_eq!(d.widget().history().len(), 2);
}

// ===== DOM mirroring =====

#[test]
fn display_value_tracks_widget_state() {
    let mut d = WidgetDriver::new();
    d.type_text("3*3");
    assert_eq!(d.dom().get(DISPLAY_ID).unwrap().get_attr("value"), Some("3*3"));
    d.press_key("Enter");
    assert_eq!(d.dom().get(DISPLAY_ID).unwrap().get_attr("value"), Some("9"));
}

#[test]
fn history_rows_carry_remove_buttons() {
    let mut d = WidgetDriver::new();
    evaluate(&mut d, "1+1");
    let row = &d.dom().get(HISTORY_ID).unwrap().children[0];
    assert_eq!(row.children.len(), 1);
    assert_eq!(row.children[0].id, "history-remove-0");
    assert_eq!(row.children[0].text, "x");
}

#[test]
fn clear_history_tooltip_follows_content() {
    let mut d = WidgetDriver::new();
    let tooltip = |d: &WidgetDriver| {
        d.dom()
            .get(CLEAR_HISTORY_ID)
            .unwrap()
            .get_attr("data-tooltip")
            .map(str::to_string)
    };
    assert_eq!(tooltip(&d), None);
    evaluate(&mut d, "1+1");
    assert!(tooltip(&d).is_some());
    d.click(CLEAR_HISTORY_ID);
    assert_eq!(tooltip(&d), None);
}
