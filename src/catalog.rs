//! The static quote catalog, its key pool, and difficulty pools.

use once_cell::sync::Lazy;

use crate::cipher::{Cipher, CipherError};
use crate::difficulty::{self, Bucket, Difficulty, ROUND_ROBIN};
use crate::puzzle::Puzzle;

/// Pre-generated permutation keys, handed out cyclically.
pub const KEY_POOL: [&str; 24] = [
    "QWERTYUIOPASDFGHJKLZXCVBNM",
    "RGTSKPMAHICDEVXLWJZYFOQNBU",
    "CKNZOGXIWYEPAQFJVDUSBMHRLT",
    "TLSYMQOANEGRBPKHCUIXZFVJDW",
    "ZNKIMOTQJSGWVAYCPBUFRHELXD",
    "CLJZPOVRWTEKUDFQYXNHIAGBMS",
    "KUZCWQVYBFTXOSJNMLARDPIHGE",
    "BCNFVASYQRXIHKDMLTOEZWGUJP",
    "JNWQAKYUTXPHGIBRDSZMCOFVEL",
    "GSEWJPDRZBLOACFTVMHKQYUINX",
    "NQBRSWUIVAXPLZMGJETOYDHKCF",
    "OCLKTWPYUSZDVRQGEFHJMXBINA",
    "FARNILEMCHYPOZBKGQVSXDUWTJ",
    "QEPRGNTWVOFKCXLYIJUDHMZBSA",
    "PAMZIQSJHOTKGXDYVUCFNLEWBR",
    "PRBFXEQOCYAVWDGSZHUIKLNJTM",
    "ODNEJZFGLWVBATUQXSHKCYIPRM",
    "PWRSBHDIJVFEKOLACNMZTYXQGU",
    "BFIPGYKRTZWQSCJUOEMXVDHLAN",
    "UYJFCWDLNIPOXEMZRTHAKGSBVQ",
    "BAPEFQMKJGXDLTNOHIZCVRYUSW",
    "UQPZFWHOVRLDCMGKYNEJIBSTXA",
    "JGFMAIZOVSLNEXKYRQTDBWCUHP",
    "OLPXTHEACDJWBYFGZVQIKNUMRS",
];

/// Base quotes in catalog order. Order matters: it drives key assignment and
/// the round-robin tier split.
pub const QUOTES: [(&str, &str); 36] = [
    ("KNOWLEDGE IS POWER", "Francis Bacon"),
    ("TIME IS MONEY", "Benjamin Franklin"),
    ("LESS IS MORE", "Ludwig Mies van der Rohe"),
    ("TO BE OR NOT TO BE", "William Shakespeare"),
    ("I THINK, THEREFORE I AM", "Rene Descartes"),
    ("FORTUNE FAVORS THE BOLD", "Virgil"),
    ("ACTIONS SPEAK LOUDER THAN WORDS", "Proverb"),
    ("THE ONLY WAY OUT IS THROUGH", "Robert Frost"),
    ("WELL DONE IS BETTER THAN WELL SAID", "Benjamin Franklin"),
    ("SIMPLICITY IS THE ULTIMATE SOPHISTICATION", "Leonardo da Vinci"),
    ("WHATEVER YOU ARE, BE A GOOD ONE", "Abraham Lincoln"),
    ("NOTHING WILL COME OF NOTHING", "William Shakespeare"),
    ("THE JOURNEY OF A THOUSAND MILES BEGINS WITH ONE STEP", "Lao Tzu"),
    ("IT ALWAYS SEEMS IMPOSSIBLE UNTIL IT'S DONE", "Nelson Mandela"),
    ("BE YOURSELF; EVERYONE ELSE IS ALREADY TAKEN", "Oscar Wilde"),
    ("THE UNEXAMINED LIFE IS NOT WORTH LIVING", "Socrates"),
    ("NO ONE CAN MAKE YOU FEEL INFERIOR WITHOUT YOUR CONSENT", "Eleanor Roosevelt"),
    ("WHERE THERE IS LOVE THERE IS LIFE", "Mahatma Gandhi"),
    ("HAPPINESS DEPENDS UPON OURSELVES", "Aristotle"),
    ("WE BECOME WHAT WE THINK ABOUT", "Earl Nightingale"),
    ("THE BEST REVENGE IS MASSIVE SUCCESS", "Frank Sinatra"),
    ("TURN YOUR WOUNDS INTO WISDOM", "Oprah Winfrey"),
    ("DWELL ON THE BEAUTY OF LIFE. WATCH THE STARS", "Marcus Aurelius"),
    ("THE SECRET OF GETTING AHEAD IS GETTING STARTED", "Mark Twain"),
    ("IN THE MIDDLE OF DIFFICULTY LIES OPPORTUNITY", "Albert Einstein"),
    ("STAY HUNGRY, STAY FOOLISH", "Steve Jobs"),
    ("QUALITY IS NOT AN ACT, IT IS A HABIT", "Aristotle"),
    ("A JOKE IS A VERY SERIOUS THING", "Winston Churchill"),
    ("LIFE IS WHAT HAPPENS WHEN YOU'RE BUSY MAKING OTHER PLANS", "John Lennon"),
    ("THE PEN IS MIGHTIER THAN THE SWORD", "Edward Bulwer-Lytton"),
    ("STRIVE NOT TO BE A SUCCESS, BUT RATHER TO BE OF VALUE", "Albert Einstein"),
    ("DO WHAT YOU CAN, WITH WHAT YOU HAVE, WHERE YOU ARE", "Theodore Roosevelt"),
    ("ELOQUENCE IS THE PAINTER OF THOUGHT", "Blaise Pascal"),
    ("THE WOUND IS THE PLACE WHERE THE LIGHT ENTERS YOU", "Rumi"),
    ("WHAT WE THINK, WE BECOME", "Buddha"),
    ("KEEP YOUR FACE ALWAYS TOWARD THE SUNSHINE", "Walt Whitman"),
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("key pool is empty")]
    EmptyKeyPool,
    #[error(transparent)]
    Key(#[from] CipherError),
}

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Fully materialized catalog: every quote already keyed, encrypted and tiered.
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
    keys: Vec<Cipher>,
}

impl Catalog {
    /// Shared catalog built from [`QUOTES`] and [`KEY_POOL`].
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    /// # Panics
    ///
    /// Panics if [`KEY_POOL`] holds a malformed key; `key_pool_is_valid`
    /// pins it.
    fn builtin() -> Self {
        let catalog = Self::from_key_strings(&QUOTES, &KEY_POOL)
            .expect("built-in key pool is valid");
        tracing::debug!(
            quotes = catalog.len(),
            keys = catalog.key_count(),
            "catalog built"
        );
        catalog
    }

    /// Build a catalog in one left-to-right pass over `quotes`.
    ///
    /// Quotes in the 30-35 letter band take hard, intermediate and advance in
    /// turn, counting from the first such quote in `quotes`.
    pub fn build(quotes: &[(&str, &str)], keys: Vec<Cipher>) -> Result<Self, CatalogError> {
        if keys.is_empty() {
            return Err(CatalogError::EmptyKeyPool);
        }
        let mut round_robin = ROUND_ROBIN.iter().copied().cycle();
        let puzzles = quotes
            .iter()
            .enumerate()
            .map(|(i, &(quote, author))| {
                let difficulty = match difficulty::bucket(difficulty::letter_count(quote)) {
                    Bucket::Fixed(d) => d,
                    Bucket::RoundRobin => round_robin.next().unwrap_or(Difficulty::Hard),
                };
                let cipher = keys[i % keys.len()];
                Puzzle::new(i as u32 + 1, quote, author, cipher, difficulty)
            })
            .collect();
        Ok(Self { puzzles, keys })
    }

    /// Build from raw key strings, rejecting malformed keys and an empty pool.
    pub fn from_key_strings(quotes: &[(&str, &str)], keys: &[&str]) -> Result<Self, CatalogError> {
        let keys = keys
            .iter()
            .map(|k| Cipher::from_key(k))
            .collect::<Result<Vec<_>, _>>()?;
        Self::build(quotes, keys)
    }

    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Key at `index`, wrapping around the pool.
    pub fn key(&self, index: usize) -> Cipher {
        self.keys[index % self.keys.len()]
    }

    /// Catalog entries of one tier, in catalog order.
    pub fn pool(&self, difficulty: Difficulty) -> Vec<&Puzzle> {
        self.puzzles
            .iter()
            .filter(|p| p.difficulty == difficulty)
            .collect()
    }
}
