//! Extraction tests against fixture markup mirroring the live results page.

use super::*;

fn results_page(items: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
<div id="decrypted"></div>
<div id="review-body">
  <div class="makers">
    <ul>
    {items}
    </ul>
  </div>
</div>
</body>
</html>"#
    )
}

fn well_formed_item(id: &str, name: &str, image: &str) -> String {
    format!(
        r#"<li><a href="{id}"><img src="{image}"><strong><span>{name}</span></strong></a></li>"#
    )
}

#[test]
fn test_extract_well_formed_items() {
    let html = results_page(&format!(
        "{}{}",
        well_formed_item("apple_iphone_15-12559.php", "Apple iPhone 15", "https://img.example/15.jpg"),
        well_formed_item("apple_iphone_15_pro-12557.php", "Apple iPhone 15 Pro", "https://img.example/15pro.jpg"),
    ));

    let entries = extract_phone_entries(&html);
    assert_eq!(
        entries,
        vec![
            PhoneEntry {
                id: "apple_iphone_15-12559.php".into(),
                name: "Apple iPhone 15".into(),
                image: "https://img.example/15.jpg".into(),
            },
            PhoneEntry {
                id: "apple_iphone_15_pro-12557.php".into(),
                name: "Apple iPhone 15 Pro".into(),
                image: "https://img.example/15pro.jpg".into(),
            },
        ]
    );
}

#[test]
fn test_malformed_items_are_skipped() {
    // Middle item has no name span; extraction continues past it.
    let html = results_page(&format!(
        "{}{}{}",
        well_formed_item("a.php", "Phone A", "a.jpg"),
        r#"<li><a href="broken.php"><img src="broken.jpg"></a></li>"#,
        well_formed_item("c.php", "Phone C", "c.jpg"),
    ));

    let entries = extract_phone_entries(&html);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "a.php");
    assert_eq!(entries[1].id, "c.php");
}

#[test]
fn test_item_without_link_is_skipped() {
    let html = results_page(r#"<li><img src="x.jpg"><strong><span>No Link</span></strong></li>"#);
    assert!(extract_phone_entries(&html).is_empty());
}

#[test]
fn test_item_without_image_is_skipped() {
    let html = results_page(r#"<li><a href="x.php"><strong><span>No Image</span></strong></a></li>"#);
    assert!(extract_phone_entries(&html).is_empty());
}

#[test]
fn test_missing_attributes_degrade_to_empty_strings() {
    // Elements present, attributes absent.
    let html = results_page(r#"<li><a><img><strong><span>Bare</span></strong></a></li>"#);
    let entries = extract_phone_entries(&html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "");
    assert_eq!(entries[0].image, "");
    assert_eq!(entries[0].name, "Bare");
}

#[test]
fn test_empty_results_page() {
    let html = results_page("");
    assert!(extract_phone_entries(&html).is_empty());
}

#[test]
fn test_items_outside_review_body_are_ignored() {
    let html = format!(
        r#"<html><body>
<div class="makers"><ul>{}</ul></div>
<div id="review-body"><div class="makers"><ul>{}</ul></div></div>
</body></html>"#,
        well_formed_item("outside.php", "Outside", "o.jpg"),
        well_formed_item("inside.php", "Inside", "i.jpg"),
    );

    let entries = extract_phone_entries(&html);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "inside.php");
}

#[test]
fn test_name_text_is_trimmed() {
    let html = results_page(r#"<li><a href="x.php"><img src="x.jpg"><strong><span>  Galaxy S24  </span></strong></a></li>"#);
    let entries = extract_phone_entries(&html);
    assert_eq!(entries[0].name, "Galaxy S24");
}
