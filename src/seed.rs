//! Titles loaded into a fresh catalog.

use crate::catalog::CatalogTransactionManager;

/// Default catalog as `(title, author)` pairs, in shelf order
///
/// Some titles appear twice; each entry is catalogued as its own book.
pub const DEFAULT_CATALOG: &[(&str, &str)] = &[
    ("To Kill a Mockingbird", "Harper Lee"),
    ("Pride and Prejudice", "Jane Austen"),
    ("The Great Gatsby", "F. Scott Fitzgerald"),
    ("War and Peace", "Leo Tolstoy"),
    ("The Book Thief", "Markus Zusak"),
    ("All the Light We Cannot See", "Anthony Doerr"),
    ("The Nightingale", "Kristin Hannah"),
    ("The Pillars of the Earth", "Ken Follett"),
    ("Gone Girl", "Gillian Flynn"),
    ("The Girl with the Dragon Tattoo", "Stieg Larsson"),
    ("Murder on the Orient Express", "Agatha Christie"),
    ("Big Little Lies", "Liane Moriarty"),
    ("The Da Vinci Code", "Dan Brown"),
    ("Angels and Demons", "Dan Brown"),
    ("The Silent Patient", "Alex Michaelides"),
    ("The Shining", "Stephen King"),
    ("It", "Stephen King"),
    ("Dracula", "Bram Stoker"),
    ("Frankenstein", "Mary Shelley"),
    ("The Hunger Games", "Suzanne Collins"),
    ("Catching Fire", "Suzanne Collins"),
    ("Mockingjay", "Suzanne Collins"),
    ("Divergent", "Veronica Roth"),
    ("Insurgent", "Veronica Roth"),
    ("Allegiant", "Veronica Roth"),
    ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
    ("Harry Potter and the Chamber of Secrets", "J.K. Rowling"),
    ("Harry Potter and the Prisoner of Azkaban", "J.K. Rowling"),
    ("Harry Potter and the Goblet of Fire", "J.K. Rowling"),
    ("The Hobbit", "J.R.R. Tolkien"),
    ("The Lord of the Rings", "J.R.R. Tolkien"),
    ("Eragon", "Christopher Paolini"),
    ("The Name of the Wind", "Patrick Rothfuss"),
    ("The Wise Man's Fear", "Patrick Rothfuss"),
    ("Twilight", "Stephenie Meyer"),
    ("New Moon", "Stephenie Meyer"),
    ("Eclipse", "Stephenie Meyer"),
    ("Breaking Dawn", "Stephenie Meyer"),
    ("City of Bones", "Cassandra Clare"),
    ("City of Ashes", "Cassandra Clare"),
    ("City of Glass", "Cassandra Clare"),
    ("Percy Jackson: The Lightning Thief", "Rick Riordan"),
    ("Percy Jackson: Sea of Monsters", "Rick Riordan"),
    ("Percy Jackson: Titan's Curse", "Rick Riordan"),
    ("Percy Jackson: Battle of the Labyrinth", "Rick Riordan"),
    ("Percy Jackson: Last Olympian", "Rick Riordan"),
    ("Twilight", "Stephenie Meyer"),
    ("Red Queen", "Victoria Aveyard"),
    ("Glass Sword", "Victoria Aveyard"),
    ("Sapiens: A Brief History of Humankind", "Yuval Noah Harari"),
    ("Homo Deus: A Brief History of Tomorrow", "Yuval Noah Harari"),
    ("Educated", "Tara Westover"),
    ("Becoming", "Michelle Obama"),
    ("The Immortal Life of Henrietta Lacks", "Rebecca Skloot"),
    ("Thinking, Fast and Slow", "Daniel Kahneman"),
    ("The Power of Habit", "Charles Duhigg"),
    ("Atomic Habits", "James Clear"),
    ("Born a Crime", "Trevor Noah"),
    ("Quiet: The Power of Introverts", "Susan Cain"),
    ("Unbroken", "Laura Hillenbrand"),
    ("The Diary of a Young Girl", "Anne Frank"),
    ("The Wright Brothers", "David McCullough"),
    ("Steve Jobs", "Walter Isaacson"),
    ("Alexander Hamilton", "Ron Chernow"),
    ("The Glass Castle", "Jeannette Walls"),
    ("Into the Wild", "Jon Krakauer"),
    ("Into Thin Air", "Jon Krakauer"),
    ("The Art of War", "Sun Tzu"),
    ("Meditations", "Marcus Aurelius"),
    ("Man's Search for Meaning", "Viktor E. Frankl"),
    ("Guns, Germs, and Steel", "Jared Diamond"),
    ("Freakonomics", "Steven D. Levitt"),
    ("Outliers", "Malcolm Gladwell"),
    ("The Tipping Point", "Malcolm Gladwell"),
    ("David and Goliath", "Malcolm Gladwell"),
    ("Blink", "Malcolm Gladwell"),
    ("The Subtle Art of Not Giving a F*ck", "Mark Manson"),
    ("12 Rules for Life", "Jordan B. Peterson"),
    ("Maus", "Art Spiegelman"),
    ("Persepolis", "Marjane Satrapi"),
    ("Watchmen", "Alan Moore"),
    ("V for Vendetta", "Alan Moore"),
    ("Saga", "Brian K. Vaughan"),
    ("Y: The Last Man", "Brian K. Vaughan"),
    ("Sandman", "Neil Gaiman"),
    ("Bone", "Jeff Smith"),
    ("Naruto", "Masashi Kishimoto"),
    ("One Piece", "Eiichiro Oda"),
    ("Attack on Titan", "Hajime Isayama"),
    ("Death Note", "Tsugumi Ohba"),
    ("Fullmetal Alchemist", "Hiromu Arakawa"),
    ("My Hero Academia", "Kohei Horikoshi"),
    ("Tokyo Ghoul", "Sui Ishida"),
    ("Fruits Basket", "Natsuki Takaya"),
    ("The Sun and Her Flowers", "Rupi Kaur"),
    ("Milk and Honey", "Rupi Kaur"),
    ("Leaves of Grass", "Walt Whitman"),
    ("The Raven", "Edgar Allan Poe"),
    ("Othello", "William Shakespeare"),
    ("Hamlet", "William Shakespeare"),
    ("Macbeth", "William Shakespeare"),
    ("The Odyssey", "Homer"),
    ("The Iliad", "Homer"),
    ("Beowulf", "Anonymous"),
    ("Oxford English Dictionary", "Oxford University Press"),
    ("Gray's Anatomy", "Henry Gray"),
    ("Encyclopedia Britannica", "Various"),
    ("How to Win Friends and Influence People", "Dale Carnegie"),
    ("The Elements of Style", "William Strunk Jr."),
    ("A Brief History of Time", "Stephen Hawking"),
    ("Cosmos", "Carl Sagan"),
    ("The Selfish Gene", "Richard Dawkins"),
    ("Guns, Germs, and Steel", "Jared Diamond"),
    ("The Art of Happiness", "Dalai Lama"),
    ("Fluent English: Perfect Natural Speech", "Barbara Raifsnider"),
    ("English Grammar in Use", "Raymond Murphy"),
    ("Word Power Made Easy", "Norman Lewis"),
    ("Practice Makes Perfect: Spanish Verb Tenses", "Dorothy Richmond"),
    ("French for Dummies", "Dodi-Katrin Schmidt"),
    ("Japanese from Zero!", "George Trombley"),
    ("Mandarin Chinese for Beginners", "Yi Ren"),
    ("Korean Made Simple", "Billy Go"),
    ("Teach Yourself Filipino", "F. S. Llamzon"),
    ("Basic Tagalog for Foreigners", "Corazon P. Paras"),
    ("Noli Me Tangere", "José Rizal"),
    ("El Filibusterismo", "José Rizal"),
    ("Florante at Laura", "Francisco Balagtas"),
    ("Mga Ibong Mandaragit", "Amado V. Hernandez"),
    ("Dekada '70", "Lualhati Bautista"),
    ("Bata, Bata... Pa'no Ka Ginawa?", "Lualhati Bautista"),
    ("Gapô", "Lualhati Bautista"),
    ("May Day Eve", "Nick Joaquin"),
    ("The Woman Who Had Two Navels", "Nick Joaquin"),
    ("A Portrait of the Artist as Filipino", "Nick Joaquin"),
    ("Smaller and Smaller Circles", "F.H. Batacan"),
    ("Ilustrado", "Miguel Syjuco"),
    ("In the Country", "Cecilia Manguerra Brainard"),
    ("Dogeaters", "Jessica Hagedorn"),
    ("America Is in the Heart", "Carlos Bulosan"),
    ("The Pretenders", "F. Sionil José"),
    ("Tree", "F. Sionil José"),
    ("Mass", "F. Sionil José"),
    ("The Rosales Saga", "F. Sionil José"),
    ("Po-on", "F. Sionil José"),
    ("Clean Code: A Handbook of Agile Software Craftsmanship", "Robert C. Martin"),
    ("The Pragmatic Programmer", "Andrew Hunt & David Thomas"),
    ("Introduction to Algorithms", "Thomas H. Cormen"),
    ("Design Patterns: Elements of Reusable Object-Oriented Software", "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides"),
    ("Head First Java", "Kathy Sierra & Bert Bates"),
    ("Effective Java", "Joshua Bloch"),
    ("Python Crash Course", "Eric Matthes"),
    ("Automate the Boring Stuff with Python", "Al Sweigart"),
    ("JavaScript: The Good Parts", "Douglas Crockford"),
    ("Eloquent JavaScript", "Marijn Haverbeke"),
    ("Learning PHP, MySQL & JavaScript", "Robin Nixon"),
    ("C Programming Language", "Brian W. Kernighan & Dennis M. Ritchie"),
    ("C++ Primer", "Stanley B. Lippman"),
    ("Programming Pearls", "Jon Bentley"),
    ("Structure and Interpretation of Computer Programs", "Harold Abelson & Gerald Jay Sussman"),
    ("Code Complete", "Steve McConnell"),
    ("Refactoring: Improving the Design of Existing Code", "Martin Fowler"),
    ("The Art of Computer Programming", "Donald E. Knuth"),
    ("You Don't Know JS", "Kyle Simpson"),
    ("Cracking the Coding Interview", "Gayle Laakmann McDowell"),
];

/// Add every title of [`DEFAULT_CATALOG`] to `catalog`
pub fn seed_default_catalog(catalog: &mut CatalogTransactionManager) {
    for &(title, author) in DEFAULT_CATALOG {
        catalog.add_book(title, author);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_adds_every_entry() {
        let mut catalog = CatalogTransactionManager::default();
        seed_default_catalog(&mut catalog);
        assert_eq!(catalog.books().len(), DEFAULT_CATALOG.len());
        assert!(catalog.books().iter().all(crate::book::Book::is_available));
    }

    #[test]
    fn test_seeded_search_finds_first_harry_potter() {
        let mut catalog = CatalogTransactionManager::default();
        seed_default_catalog(&mut catalog);
        let found = catalog.search_by_title("harry").and_then(|id| catalog.book(id));
        assert_eq!(
            found.map(crate::book::Book::title),
            Ok("Harry Potter and the Sorcerer's Stone")
        );
    }
}
