use tracing::{info, warn};
use crate::books::dto::NewBookDto;
use crate::catalog::domain::CatalogService;
use crate::core::library::LibraryError;

// title, author, isbn, category, description
pub const SAMPLE_BOOKS: [(&str, &str, &str, &str, &str); 100] = [
    ("The Great Gatsby", "F. Scott Fitzgerald", "978-0743273565", "Fiction", "A story of the fabulously wealthy Jay Gatsby"),
    ("To Kill a Mockingbird", "Harper Lee", "978-0446310789", "Fiction", "The story of racial injustice and the loss of innocence"),
    ("Pride and Prejudice", "Jane Austen", "978-0141439518", "Fiction", "A romantic novel of manners"),
    ("The Catcher in the Rye", "J.D. Salinger", "978-0316769488", "Fiction", "A classic coming-of-age story"),
    ("The Alchemist", "Paulo Coelho", "978-0062315007", "Fiction", "A philosophical novel"),
    ("One Hundred Years of Solitude", "Gabriel García Márquez", "978-0060883287", "Fiction", "A magical realism masterpiece"),
    ("The Kite Runner", "Khaled Hosseini", "978-1594631931", "Fiction", "A story of friendship and redemption"),
    ("The Book Thief", "Markus Zusak", "978-0375842207", "Fiction", "A story set in Nazi Germany"),
    ("The Little Prince", "Antoine de Saint-Exupéry", "978-0156013987", "Fiction", "A philosophical tale"),
    ("The Road", "Cormac McCarthy", "978-0307387899", "Fiction", "A post-apocalyptic novel"),
    ("The Secret Life of Bees", "Sue Monk Kidd", "978-0142001745", "Fiction", "A coming-of-age story"),
    ("The Help", "Kathryn Stockett", "978-0425232200", "Fiction", "A story about civil rights"),
    ("The Giver", "Lois Lowry", "978-0544336261", "Fiction", "A dystopian novel"),
    ("The Color Purple", "Alice Walker", "978-0156028356", "Fiction", "A powerful story of resilience"),
    ("The Bell Jar", "Sylvia Plath", "978-0061148514", "Fiction", "A semi-autobiographical novel"),
    ("The Perks of Being a Wallflower", "Stephen Chbosky", "978-0671027346", "Fiction", "A coming-of-age story"),
    ("The Curious Incident of the Dog in the Night-Time", "Mark Haddon", "978-1400032716", "Fiction", "A mystery novel"),
    ("The Fault in Our Stars", "John Green", "978-0142424179", "Fiction", "A young adult novel"),
    ("The Goldfinch", "Donna Tartt", "978-0316055437", "Fiction", "A Pulitzer Prize-winning novel"),
    ("The Night Circus", "Erin Morgenstern", "978-0307744432", "Fiction", "A magical fantasy novel"),
    ("1984", "George Orwell", "978-0451524935", "Science Fiction", "A dystopian social science fiction novel"),
    ("Dune", "Frank Herbert", "978-0441172719", "Science Fiction", "A science fiction masterpiece"),
    ("The Martian", "Andy Weir", "978-0553418026", "Science Fiction", "A survival story on Mars"),
    ("Project Hail Mary", "Andy Weir", "978-1524741331", "Science Fiction", "A space adventure"),
    ("Neuromancer", "William Gibson", "978-0441569595", "Science Fiction", "A cyberpunk classic"),
    ("Foundation", "Isaac Asimov", "978-0553293357", "Science Fiction", "A space opera"),
    ("Ender's Game", "Orson Scott Card", "978-0812550702", "Science Fiction", "A military science fiction novel"),
    ("The Three-Body Problem", "Liu Cixin", "978-0765382030", "Science Fiction", "A hard science fiction novel"),
    ("Snow Crash", "Neal Stephenson", "978-0553380958", "Science Fiction", "A cyberpunk novel"),
    ("The Left Hand of Darkness", "Ursula K. Le Guin", "978-0441478125", "Science Fiction", "A science fiction novel"),
    ("Hyperion", "Dan Simmons", "978-0553283686", "Science Fiction", "A science fiction novel"),
    ("The Dispossessed", "Ursula K. Le Guin", "978-0060512750", "Science Fiction", "An anarchist utopian novel"),
    ("Altered Carbon", "Richard K. Morgan", "978-0345457684", "Science Fiction", "A cyberpunk novel"),
    ("The Forever War", "Joe Haldeman", "978-0312536633", "Science Fiction", "A military science fiction novel"),
    ("Children of Time", "Adrian Tchaikovsky", "978-1447273300", "Science Fiction", "A space opera"),
    ("The Fifth Season", "N.K. Jemisin", "978-0316229296", "Science Fiction", "A fantasy novel"),
    ("Ancillary Justice", "Ann Leckie", "978-0316246620", "Science Fiction", "A space opera"),
    ("The Windup Girl", "Paolo Bacigalupi", "978-1597808217", "Science Fiction", "A biopunk novel"),
    ("Station Eleven", "Emily St. John Mandel", "978-0804172448", "Science Fiction", "A post-apocalyptic novel"),
    ("The City & the City", "China Miéville", "978-0345497529", "Science Fiction", "A weird fiction novel"),
    ("The Hobbit", "J.R.R. Tolkien", "978-0547928227", "Fantasy", "A fantasy novel and children's book"),
    ("The Lord of the Rings", "J.R.R. Tolkien", "978-0544003415", "Fantasy", "An epic high-fantasy novel"),
    ("Harry Potter and the Sorcerer's Stone", "J.K. Rowling", "978-0590353427", "Fantasy", "The first book in the Harry Potter series"),
    ("A Game of Thrones", "George R.R. Martin", "978-0553103540", "Fantasy", "The first book in A Song of Ice and Fire"),
    ("The Name of the Wind", "Patrick Rothfuss", "978-0756404741", "Fantasy", "A fantasy novel"),
    ("The Way of Kings", "Brandon Sanderson", "978-0765326355", "Fantasy", "An epic fantasy novel"),
    ("Mistborn: The Final Empire", "Brandon Sanderson", "978-0765350386", "Fantasy", "A fantasy novel"),
    ("The Lies of Locke Lamora", "Scott Lynch", "978-0553588941", "Fantasy", "A fantasy novel"),
    ("The Eye of the World", "Robert Jordan", "978-0812511819", "Fantasy", "The first book in The Wheel of Time"),
    ("The Blade Itself", "Joe Abercrombie", "978-0575079791", "Fantasy", "A fantasy novel"),
    ("The Poppy War", "R.F. Kuang", "978-0062662569", "Fantasy", "A fantasy novel"),
    ("The Priory of the Orange Tree", "Samantha Shannon", "978-1635570299", "Fantasy", "A fantasy novel"),
    ("The Bear and the Nightingale", "Katherine Arden", "978-1101885957", "Fantasy", "A fantasy novel"),
    ("The City of Brass", "S.A. Chakraborty", "978-0062678102", "Fantasy", "A fantasy novel"),
    // same isbn as the Science Fiction entry above, skipped on load
    ("The Fifth Season", "N.K. Jemisin", "978-0316229296", "Fantasy", "A fantasy novel"),
    ("The Grace of Kings", "Ken Liu", "978-1481424271", "Fantasy", "A fantasy novel"),
    ("The Traitor Baru Cormorant", "Seth Dickinson", "978-0765380739", "Fantasy", "A fantasy novel"),
    ("The Goblin Emperor", "Katherine Addison", "978-0765326997", "Fantasy", "A fantasy novel"),
    ("The Library at Mount Char", "Scott Hawkins", "978-0553418606", "Fantasy", "A fantasy novel"),
    ("The Ten Thousand Doors of January", "Alix E. Harrow", "978-0316421997", "Fantasy", "A fantasy novel"),
    ("The Da Vinci Code", "Dan Brown", "978-0307474278", "Mystery", "A mystery thriller novel"),
    ("Gone Girl", "Gillian Flynn", "978-0307588364", "Mystery", "A psychological thriller"),
    ("The Girl with the Dragon Tattoo", "Stieg Larsson", "978-0307454541", "Mystery", "A crime thriller"),
    ("The Silent Patient", "Alex Michaelides", "978-1250301697", "Mystery", "A psychological thriller"),
    ("The Thursday Murder Club", "Richard Osman", "978-0241988268", "Mystery", "A cozy mystery"),
    ("The Guest List", "Lucy Foley", "978-0062868930", "Mystery", "A thriller novel"),
    ("The Seven Deaths of Evelyn Hardcastle", "Stuart Turton", "978-1492657969", "Mystery", "A mystery novel"),
    ("The Last Thing He Told Me", "Laura Dave", "978-1501171345", "Mystery", "A mystery novel"),
    ("The Maidens", "Alex Michaelides", "978-1250304452", "Mystery", "A psychological thriller"),
    ("The Paris Apartment", "Lucy Foley", "978-0008384807", "Mystery", "A thriller novel"),
    ("The Plot", "Jean Hanff Korelitz", "978-1250790755", "Mystery", "A psychological thriller"),
    ("The Sanatorium", "Sarah Pearse", "978-0593296677", "Mystery", "A thriller novel"),
    ("The Push", "Ashley Audrain", "978-0525657601", "Mystery", "A psychological thriller"),
    ("The Last House on Needless Street", "Catriona Ward", "978-1250812624", "Mystery", "A psychological thriller"),
    ("The Other Black Girl", "Zakiya Dalila Harris", "978-1982160135", "Mystery", "A thriller novel"),
    ("The Final Girl Support Group", "Grady Hendrix", "978-0593201237", "Mystery", "A horror novel"),
    ("The Night She Disappeared", "Lisa Jewell", "978-1982137335", "Mystery", "A thriller novel"),
    ("The Last Thing to Burn", "Will Dean", "978-0316703484", "Mystery", "A thriller novel"),
    ("The Therapist", "B.A. Paris", "978-1250270797", "Mystery", "A psychological thriller"),
    ("The Perfect Marriage", "Jeneva Rose", "978-1950057317", "Mystery", "A thriller novel"),
    ("Steve Jobs", "Walter Isaacson", "978-1451648539", "Biography", "The biography of Apple's co-founder"),
    ("Einstein: His Life and Universe", "Walter Isaacson", "978-0743264747", "Biography", "A biography of Albert Einstein"),
    ("Becoming", "Michelle Obama", "978-1524763138", "Biography", "Memoir of the former First Lady"),
    ("The Autobiography of Malcolm X", "Malcolm X", "978-0345350688", "Biography", "The autobiography of Malcolm X"),
    ("The Diary of a Young Girl", "Anne Frank", "978-0553577129", "Biography", "The diary of Anne Frank"),
    ("Long Walk to Freedom", "Nelson Mandela", "978-0316548182", "Biography", "The autobiography of Nelson Mandela"),
    ("The Wright Brothers", "David McCullough", "978-1476728742", "Biography", "The story of the Wright brothers"),
    ("The Immortal Life of Henrietta Lacks", "Rebecca Skloot", "978-1400052189", "Biography", "The story of Henrietta Lacks"),
    ("The Glass Castle", "Jeannette Walls", "978-0743247542", "Biography", "A memoir of Jeannette Walls"),
    ("Born a Crime", "Trevor Noah", "978-0399588174", "Biography", "Stories from a South African childhood"),
    ("Sapiens", "Yuval Noah Harari", "978-0062316097", "History", "A brief history of humankind"),
    ("Guns, Germs, and Steel", "Jared Diamond", "978-0393317558", "History", "The fates of human societies"),
    ("The Rise and Fall of the Third Reich", "William L. Shirer", "978-0671728687", "History", "A history of Nazi Germany"),
    ("A People's History of the United States", "Howard Zinn", "978-0062397348", "History", "A history of the United States"),
    ("The Guns of August", "Barbara W. Tuchman", "978-0345476098", "History", "The outbreak of World War I"),
    ("The Silk Roads", "Peter Frankopan", "978-1101912379", "History", "A new history of the world"),
    ("SPQR", "Mary Beard", "978-0871404637", "History", "A history of ancient Rome"),
    ("The Crusades", "Thomas Asbridge", "978-0060787288", "History", "The authoritative history of the war for the Holy Land"),
    ("The Plantagenets", "Dan Jones", "978-0143124924", "History", "The warrior kings and queens who made England"),
    ("The Romanovs", "Simon Sebag Montefiore", "978-0307266521", "History", "1613-1918"),
];

/// Adds the sample collection through the regular add path. Books that fail
/// validation or repeat an ISBN are skipped; the number added is returned.
pub fn load_sample_books(catalog_svc: &dyn CatalogService) -> usize {
    let mut added = 0;
    for (title, author, isbn, category, description) in SAMPLE_BOOKS {
        match catalog_svc.add_book(&NewBookDto::new(title, author, isbn, category, description)) {
            Ok(_) => added += 1,
            Err(LibraryError::DuplicateIsbn { isbn }) => {
                warn!(title, isbn = isbn.as_str(), "skipping sample book with duplicate isbn");
            }
            Err(err) => {
                warn!(title, error = %err, "skipping invalid sample book");
            }
        }
    }
    info!(added, "loaded sample books");
    added
}
