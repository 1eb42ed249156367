//! Photo and history display helpers.

use std::collections::HashSet;

use photodeck_core::{PhotoRecord, SearchHistoryEntry};

use super::tables::{format_timestamp, print_separator, truncate_string};

/// Print photos as a table. Favorites are starred.
pub fn print_photo_table(photos: &[PhotoRecord], favorites: &HashSet<i64>) {
    println!(
        "{:<1} {:<10} {:<11} {:<24} Preview",
        "", "ID", "Size", "Photographer"
    );
    print_separator(100);

    for photo in photos {
        let star = if favorites.contains(&photo.id) { "*" } else { "" };
        println!(
            "{:<1} {:<10} {:<11} {:<24} {}",
            star,
            photo.id,
            format!("{}x{}", photo.width, photo.height),
            truncate_string(&photo.photographer, 23),
            photo.src.medium
        );
    }
}

/// Print every field of a single photo.
pub fn print_photo_details(photo: &PhotoRecord, is_favorite: bool) {
    println!("Photo {}", photo.id);
    print_separator(60);
    println!("Photographer: {}", photo.photographer);
    println!("Profile:      {}", photo.photographer_url);
    println!("Size:         {}x{}", photo.width, photo.height);
    println!("Favorite:     {}", if is_favorite { "yes" } else { "no" });
    println!();
    println!("Original: {}", photo.src.original);
    println!("Large:    {}", photo.src.large);
    println!("Medium:   {}", photo.src.medium);
    println!("Small:    {}", photo.src.small);
}

/// Print history entries, most recent first.
pub fn print_history(entries: &[SearchHistoryEntry]) {
    println!("{:<20} Query", "Searched");
    print_separator(60);
    for entry in entries {
        println!("{:<20} {}", format_timestamp(entry.searched_at), entry.query);
    }
}
