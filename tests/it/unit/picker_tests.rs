//! Unit tests for the attachment picker.

use attachment_carousel::PickerError;
use attachment_carousel::picker::{FileObject, PickerOptions, PickerType, create_picker};
use std::cell::RefCell;
use std::rc::Rc;

fn recording_options(picked: &Rc<RefCell<Vec<String>>>, canceled: &Rc<RefCell<u32>>) -> PickerOptions {
    let picked = Rc::clone(picked);
    let canceled = Rc::clone(canceled);
    PickerOptions::new(move |file| picked.borrow_mut().push(file.name))
        .on_canceled(move || *canceled.borrow_mut() += 1)
}

#[test]
fn test_resolve_delivers_file() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let canceled = Rc::new(RefCell::new(0));
    let mut picker = create_picker(PickerType::File);

    picker.open(recording_options(&picked, &canceled));
    assert!(picker.is_open());
    picker.resolve(FileObject::new("receipt.pdf", "file:///receipt.pdf")).unwrap();

    assert!(!picker.is_open());
    assert_eq!(*picked.borrow(), vec!["receipt.pdf".to_string()]);
    assert_eq!(*canceled.borrow(), 0);
}

#[test]
fn test_cancel_runs_callback_once() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let canceled = Rc::new(RefCell::new(0));
    let mut picker = create_picker(PickerType::File);

    picker.open(recording_options(&picked, &canceled));
    picker.cancel();
    picker.cancel();

    assert_eq!(*canceled.borrow(), 1);
    assert!(picked.borrow().is_empty());
}

#[test]
fn test_reopen_cancels_previous_request() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let canceled = Rc::new(RefCell::new(0));
    let mut picker = create_picker(PickerType::File);

    picker.open(recording_options(&picked, &canceled));
    picker.open(recording_options(&picked, &canceled));
    assert_eq!(*canceled.borrow(), 1);

    picker.resolve(FileObject::new("a.png", "file:///a.png")).unwrap();
    assert_eq!(picked.borrow().len(), 1);
}

#[test]
fn test_resolve_without_request() {
    let mut picker = create_picker(PickerType::Image);
    assert_eq!(
        picker.resolve(FileObject::new("a.png", "file:///a.png")),
        Err(PickerError::NotOpen)
    );
}

#[test]
fn test_image_picker_rejects_other_types() {
    let picked = Rc::new(RefCell::new(Vec::new()));
    let canceled = Rc::new(RefCell::new(0));
    let mut picker = create_picker(PickerType::Image);
    picker.open(recording_options(&picked, &canceled));

    let pdf = FileObject::new("a.pdf", "file:///a.pdf").with_mime_type("application/pdf");
    assert!(matches!(
        picker.resolve(pdf),
        Err(PickerError::UnsupportedType { picker: "image", .. })
    ));
    assert!(picker.is_open());

    let png = FileObject::new("a.png", "file:///a.png")
        .with_mime_type("image/png")
        .with_size(1024);
    picker.resolve(png).unwrap();
    assert_eq!(*picked.borrow(), vec!["a.png".to_string()]);
}
