// Shared by the bench targets in this directory
#[allow(dead_code)]
pub fn generate_deck(slides: usize) -> String {
    let mut deck = String::from("---\nslides: true\ntheme: dark\n---\n\n");
    for i in 0..slides {
        if i > 0 {
            deck.push_str("---\n");
            if i % 3 == 0 {
                deck.push_str("layout: two-cols\nbackground: navy\n---\n");
            }
        }
        deck.push_str(&format!("\n# Slide {i}\n\n- Point one\n- Point two\n\n"));
        deck.push_str("```rust {lines,1|2-3}\nfn main() {\n    println!(\"---\");\n}\n```\n\n");
        deck.push_str("<!-- Remember to pause here -->\n\n");
    }
    deck
}
