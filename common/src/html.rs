//! `<select>` and `<option>` builders used by admin and board forms.
//!
//! Values are inserted verbatim; callers own escaping of anything that did
//! not come from trusted configuration.

/// Member level picker for levels `start..=end`.
pub fn member_level_select(id: &str, start: u8, end: u8, selected: u8, event: &str) -> String {
    let mut html = format!(r#"<select id="{id}" name="{id}" {event}>"#);
    for level in start..=end {
        let flag = if level == selected { "selected" } else { "" };
        html.push_str(&format!(r#"<option value="{level}" {flag}>{level}</option>"#));
    }
    html.push_str("</select>");
    html
}

/// Skin picker. `skins` is the list of skin directory names.
pub fn skin_select<S: AsRef<str>>(id: &str, skins: &[S], selected: &str, event: &str) -> String {
    let mut html = format!(r#"<select id="{id}" name="{id}" {event}>"#);
    html.push_str(r#"<option value="">선택</option>"#);
    for skin in skins.iter().map(AsRef::as_ref) {
        html.push_str(&plain_option(skin, selected));
    }
    html.push_str("</select>");
    html
}

/// DHTML editor picker. The board-level picker (`bo_select_editor`) offers
/// "use the site default" as its first choice.
pub fn editor_select<S: AsRef<str>>(id: &str, editors: &[S], selected: &str) -> String {
    let mut html = format!(r#"<select id="{id}" name="{id}">"#);
    if id == "bo_select_editor" {
        let flag = if selected.is_empty() { "selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="" {flag}>기본환경설정의 에디터 사용</option>"#
        ));
    } else {
        html.push_str(r#"<option value="">사용안함</option>"#);
    }
    for editor in editors.iter().map(AsRef::as_ref) {
        html.push_str(&plain_option(editor, selected));
    }
    html.push_str("</select>");
    html
}

/// Member id picker. `member_ids` is already filtered by level.
pub fn member_id_select<S: AsRef<str>>(
    id: &str,
    member_ids: &[S],
    selected: &str,
    event: &str,
) -> String {
    let mut html = format!(r#"<select id="{id}" name="{id}" {event}><option value="">선택하세요</option>"#);
    for mb_id in member_ids.iter().map(AsRef::as_ref) {
        html.push_str(&plain_option(mb_id, selected));
    }
    html.push_str("</select>");
    html
}

/// Group picker over `(gr_id, gr_subject)` pairs.
pub fn group_select<S: AsRef<str>>(id: &str, groups: &[(S, S)], selected: &str, event: &str) -> String {
    let mut html = format!("<select id=\"{id}\" name=\"{id}\" {event}>\n");
    for (i, (gr_id, subject)) in groups.iter().enumerate() {
        if i == 0 {
            html.push_str(r#"<option value="">선택</option>"#);
        }
        html.push_str(&option_selected(gr_id.as_ref(), selected, subject.as_ref()));
    }
    html.push_str("</select>");
    html
}

fn plain_option(value: &str, selected: &str) -> String {
    let flag = if value == selected { "selected" } else { "" };
    format!(r#"<option value="{value}" {flag}>{value}</option>"#)
}

/// A single `<option>`; `text` defaults to `value` when empty.
pub fn option_selected(value: &str, selected: &str, text: &str) -> String {
    let text = if text.is_empty() { value } else { text };
    if value == selected {
        format!("<option value=\"{value}\" selected=\"selected\">{text}</option>\n")
    } else {
        format!("<option value=\"{value}\">{text}</option>\n")
    }
}

/// ` selected="selected"` when the stored field equals `value`.
pub fn selected_attr<T: PartialEq>(field_value: Option<T>, value: T) -> &'static str {
    match field_value {
        Some(field_value) if field_value == value => r#" selected="selected""#,
        _ => "",
    }
}

/// `checked="checked"` when `option` is one of the comma separated `values`.
pub fn option_array_checked(option: &str, values: &str) -> &'static str {
    if values.split(',').any(|v| v == option) {
        r#"checked="checked""#
    } else {
        ""
    }
}

/// 1 when `item` is in `list`, otherwise `default`.
pub fn flag_in_list<T: PartialEq>(list: Option<&[T]>, item: &T, default: u8) -> u8 {
    match list {
        Some(list) if list.contains(item) => 1,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_level_select() {
        let html = member_level_select("mb_level", 1, 3, 2, "");
        assert_eq!(
            html,
            concat!(
                r#"<select id="mb_level" name="mb_level" >"#,
                r#"<option value="1" >1</option>"#,
                r#"<option value="2" selected>2</option>"#,
                r#"<option value="3" >3</option>"#,
                "</select>"
            )
        );
    }

    #[test]
    fn test_skin_select_marks_selected() {
        let html = skin_select("bo_skin", &["basic", "gallery"], "gallery", r#"onchange="go()""#);
        assert!(html.starts_with(r#"<select id="bo_skin" name="bo_skin" onchange="go()">"#));
        assert!(html.contains(r#"<option value="">선택</option>"#));
        assert!(html.contains(r#"<option value="basic" >basic</option>"#));
        assert!(html.contains(r#"<option value="gallery" selected>gallery</option>"#));
    }

    #[test]
    fn test_editor_select_default_option() {
        let html = editor_select("bo_select_editor", &["smarteditor2"], "");
        assert!(html.contains(r#"<option value="" selected>기본환경설정의 에디터 사용</option>"#));

        let html = editor_select("cf_editor", &["smarteditor2"], "smarteditor2");
        assert!(html.contains(r#"<option value="">사용안함</option>"#));
        assert!(html.contains(r#"<option value="smarteditor2" selected>smarteditor2</option>"#));
    }

    #[test]
    fn test_member_id_select() {
        let html = member_id_select("mb_id", &["admin", "guest"], "admin", "");
        assert!(html.starts_with(r#"<select id="mb_id" name="mb_id" ><option value="">선택하세요</option>"#));
        assert!(html.contains(r#"<option value="admin" selected>admin</option>"#));
        assert!(html.ends_with("</select>"));
    }

    #[test]
    fn test_group_select() {
        let groups = [("community", "커뮤니티"), ("shop", "쇼핑")];
        let html = group_select("gr_id", &groups, "shop", "");
        assert_eq!(
            html,
            concat!(
                "<select id=\"gr_id\" name=\"gr_id\" >\n",
                "<option value=\"\">선택</option>",
                "<option value=\"community\">커뮤니티</option>\n",
                "<option value=\"shop\" selected=\"selected\">쇼핑</option>\n",
                "</select>"
            )
        );
    }

    #[test]
    fn test_group_select_empty() {
        let groups: [(&str, &str); 0] = [];
        assert_eq!(group_select("gr_id", &groups, "", ""), "<select id=\"gr_id\" name=\"gr_id\" >\n</select>");
    }

    #[test]
    fn test_option_selected_text_fallback() {
        assert_eq!(option_selected("a", "b", ""), "<option value=\"a\">a</option>\n");
    }

    #[test]
    fn test_selected_attr() {
        assert_eq!(selected_attr(Some(3), 3), r#" selected="selected""#);
        assert_eq!(selected_attr(Some("a"), "b"), "");
        assert_eq!(selected_attr(None, 1), "");
    }

    #[test]
    fn test_option_array_checked() {
        assert_eq!(option_array_checked("b", "a,b,c"), r#"checked="checked""#);
        assert_eq!(option_array_checked("d", "a,b,c"), "");
        assert_eq!(option_array_checked("a", ""), "");
    }

    #[test]
    fn test_flag_in_list() {
        let list = [1, 2, 3];
        assert_eq!(flag_in_list(Some(&list[..]), &2, 0), 1);
        assert_eq!(flag_in_list(Some(&list[..]), &5, 0), 0);
        assert_eq!(flag_in_list::<i32>(None, &1, 7), 7);
    }
}
