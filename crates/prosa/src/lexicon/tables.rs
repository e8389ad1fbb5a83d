//! Built-in word lists.
//!
//! All entries are lowercase. Abbreviations and titles are stored without
//! their trailing period.

/// Closed-class and high-frequency words with their Penn Treebank tag
pub(super) const CLOSED_CLASS: &[(&str, &str)] = &[
  // determiners
  ("the", "DT"),
  ("a", "DT"),
  ("an", "DT"),
  ("this", "DT"),
  ("these", "DT"),
  ("those", "DT"),
  ("every", "DT"),
  ("each", "DT"),
  ("some", "DT"),
  ("any", "DT"),
  ("no", "DT"),
  ("all", "DT"),
  ("both", "DT"),
  ("either", "DT"),
  ("neither", "DT"),
  ("another", "DT"),
  // pronouns
  ("i", "PRP"),
  ("you", "PRP"),
  ("he", "PRP"),
  ("she", "PRP"),
  ("it", "PRP"),
  ("we", "PRP"),
  ("they", "PRP"),
  ("me", "PRP"),
  ("him", "PRP"),
  ("us", "PRP"),
  ("them", "PRP"),
  ("myself", "PRP"),
  ("yourself", "PRP"),
  ("himself", "PRP"),
  ("herself", "PRP"),
  ("itself", "PRP"),
  ("ourselves", "PRP"),
  ("themselves", "PRP"),
  ("my", "PRP$"),
  ("your", "PRP$"),
  ("his", "PRP$"),
  ("her", "PRP$"),
  ("its", "PRP$"),
  ("our", "PRP$"),
  ("their", "PRP$"),
  // wh-words
  ("who", "WP"),
  ("whom", "WP"),
  ("what", "WP"),
  ("whose", "WP$"),
  ("which", "WDT"),
  ("when", "WRB"),
  ("where", "WRB"),
  ("why", "WRB"),
  ("how", "WRB"),
  // prepositions and subordinating conjunctions
  ("of", "IN"),
  ("in", "IN"),
  ("on", "IN"),
  ("at", "IN"),
  ("by", "IN"),
  ("for", "IN"),
  ("with", "IN"),
  ("from", "IN"),
  ("about", "IN"),
  ("as", "IN"),
  ("into", "IN"),
  ("onto", "IN"),
  ("over", "IN"),
  ("under", "IN"),
  ("after", "IN"),
  ("before", "IN"),
  ("between", "IN"),
  ("through", "IN"),
  ("during", "IN"),
  ("without", "IN"),
  ("within", "IN"),
  ("against", "IN"),
  ("among", "IN"),
  ("since", "IN"),
  ("until", "IN"),
  ("upon", "IN"),
  ("than", "IN"),
  ("because", "IN"),
  ("while", "IN"),
  ("although", "IN"),
  ("though", "IN"),
  ("if", "IN"),
  ("whether", "IN"),
  ("that", "IN"),
  ("like", "IN"),
  ("near", "IN"),
  ("across", "IN"),
  ("behind", "IN"),
  ("beyond", "IN"),
  ("toward", "IN"),
  ("towards", "IN"),
  ("per", "IN"),
  ("via", "IN"),
  ("around", "IN"),
  ("to", "TO"),
  // coordinating conjunctions
  ("and", "CC"),
  ("or", "CC"),
  ("but", "CC"),
  ("nor", "CC"),
  ("yet", "CC"),
  ("plus", "CC"),
  // modals, including the stems left behind by "can't" and "won't"
  ("can", "MD"),
  ("could", "MD"),
  ("will", "MD"),
  ("would", "MD"),
  ("shall", "MD"),
  ("should", "MD"),
  ("may", "MD"),
  ("might", "MD"),
  ("must", "MD"),
  ("ca", "MD"),
  ("wo", "MD"),
  ("'ll", "MD"),
  ("'d", "MD"),
  // auxiliaries
  ("be", "VB"),
  ("is", "VBZ"),
  ("am", "VBP"),
  ("are", "VBP"),
  ("was", "VBD"),
  ("were", "VBD"),
  ("been", "VBN"),
  ("being", "VBG"),
  ("has", "VBZ"),
  ("have", "VBP"),
  ("had", "VBD"),
  ("having", "VBG"),
  ("do", "VBP"),
  ("does", "VBZ"),
  ("did", "VBD"),
  ("done", "VBN"),
  ("doing", "VBG"),
  ("'re", "VBP"),
  ("'ve", "VBP"),
  ("'m", "VBP"),
  ("n't", "RB"),
  ("not", "RB"),
  // irregular past tenses
  ("said", "VBD"),
  ("went", "VBD"),
  ("made", "VBD"),
  ("got", "VBD"),
  ("took", "VBD"),
  ("came", "VBD"),
  ("saw", "VBD"),
  ("knew", "VBD"),
  ("thought", "VBD"),
  ("told", "VBD"),
  ("became", "VBD"),
  ("left", "VBD"),
  ("felt", "VBD"),
  ("brought", "VBD"),
  ("began", "VBD"),
  ("kept", "VBD"),
  ("held", "VBD"),
  ("wrote", "VBD"),
  ("stood", "VBD"),
  ("heard", "VBD"),
  ("meant", "VBD"),
  ("met", "VBD"),
  ("ran", "VBD"),
  ("paid", "VBD"),
  ("sat", "VBD"),
  ("spoke", "VBD"),
  ("led", "VBD"),
  ("grew", "VBD"),
  ("lost", "VBD"),
  ("fell", "VBD"),
  ("sent", "VBD"),
  ("built", "VBD"),
  ("understood", "VBD"),
  ("drew", "VBD"),
  ("broke", "VBD"),
  ("spent", "VBD"),
  ("won", "VBD"),
  ("bought", "VBD"),
  ("taught", "VBD"),
  ("caught", "VBD"),
  ("found", "VBD"),
  ("gave", "VBD"),
  ("ate", "VBD"),
  ("drank", "VBD"),
  ("sold", "VBD"),
  ("born", "VBN"),
  ("given", "VBN"),
  ("taken", "VBN"),
  ("written", "VBN"),
  ("seen", "VBN"),
  ("known", "VBN"),
  ("gone", "VBN"),
  // adverbs
  ("very", "RB"),
  ("also", "RB"),
  ("just", "RB"),
  ("now", "RB"),
  ("then", "RB"),
  ("here", "RB"),
  ("there", "RB"),
  ("only", "RB"),
  ("even", "RB"),
  ("still", "RB"),
  ("already", "RB"),
  ("always", "RB"),
  ("never", "RB"),
  ("often", "RB"),
  ("sometimes", "RB"),
  ("too", "RB"),
  ("quite", "RB"),
  ("rather", "RB"),
  ("almost", "RB"),
  ("soon", "RB"),
  ("again", "RB"),
  ("ever", "RB"),
  ("perhaps", "RB"),
  ("maybe", "RB"),
  ("however", "RB"),
  ("so", "RB"),
  ("well", "RB"),
  // adjectives
  ("good", "JJ"),
  ("new", "JJ"),
  ("first", "JJ"),
  ("last", "JJ"),
  ("long", "JJ"),
  ("great", "JJ"),
  ("little", "JJ"),
  ("own", "JJ"),
  ("other", "JJ"),
  ("old", "JJ"),
  ("right", "JJ"),
  ("big", "JJ"),
  ("high", "JJ"),
  ("different", "JJ"),
  ("small", "JJ"),
  ("large", "JJ"),
  ("next", "JJ"),
  ("early", "JJ"),
  ("young", "JJ"),
  ("important", "JJ"),
  ("few", "JJ"),
  ("public", "JJ"),
  ("bad", "JJ"),
  ("same", "JJ"),
  ("able", "JJ"),
  ("late", "JJ"),
  ("hard", "JJ"),
  ("major", "JJ"),
  ("many", "JJ"),
  ("much", "JJ"),
  ("such", "JJ"),
  ("happy", "JJ"),
  ("better", "JJR"),
  ("more", "JJR"),
  ("less", "JJR"),
  ("best", "JJS"),
  ("most", "JJS"),
  ("least", "JJS"),
  // nouns that the suffix rules get wrong
  ("today", "NN"),
  ("yesterday", "NN"),
  ("tomorrow", "NN"),
  ("people", "NNS"),
  ("children", "NNS"),
  ("men", "NNS"),
  ("women", "NNS"),
  ("news", "NN"),
  ("business", "NN"),
  ("process", "NN"),
  // number words
  ("one", "CD"),
  ("two", "CD"),
  ("three", "CD"),
  ("four", "CD"),
  ("five", "CD"),
  ("six", "CD"),
  ("seven", "CD"),
  ("eight", "CD"),
  ("nine", "CD"),
  ("ten", "CD"),
  ("hundred", "CD"),
  ("thousand", "CD"),
  ("million", "CD"),
  ("billion", "CD"),
  // interjections
  ("oh", "UH"),
  ("hello", "UH"),
  ("hi", "UH"),
  ("wow", "UH"),
  ("yes", "UH"),
];

/// Base forms of common verbs, used to recognise inflections and to repair
/// noun/verb ambiguity from context
pub(super) const VERB_BASES: &[&str] = &[
  "say", "go", "make", "get", "take", "come", "see", "know", "think", "give", "find", "tell",
  "work", "live", "want", "use", "call", "try", "ask", "need", "feel", "become", "leave", "put",
  "mean", "keep", "let", "begin", "seem", "help", "show", "hear", "play", "run", "move", "like",
  "believe", "hold", "bring", "write", "provide", "sit", "stand", "lose", "pay", "meet",
  "include", "continue", "set", "learn", "change", "lead", "understand", "watch", "follow",
  "stop", "create", "speak", "read", "allow", "add", "spend", "grow", "open", "walk", "win",
  "offer", "remember", "love", "consider", "appear", "buy", "wait", "serve", "die", "send",
  "expect", "build", "stay", "fall", "cut", "reach", "kill", "remain", "eat", "drink", "sell",
  "visit", "announce", "acquire", "join", "travel", "study", "look", "start", "turn", "report",
  "plan", "launch", "release", "close", "sign", "hire", "invest", "develop",
];

/// Abbreviations whose trailing period belongs to the token
pub(super) const ABBREVIATIONS: &[&str] = &[
  "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "inc", "ltd", "co",
  "corp", "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "e.g",
  "i.e", "u.s", "u.k", "a.m", "p.m", "fig", "gen", "gov", "sen", "rep", "capt", "lt",
  "col", "sgt", "rev", "dept", "est", "approx", "ave", "blvd",
];

/// Personal titles that announce a PERSON mention
pub(super) const TITLES: &[&str] = &[
  "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "dame", "gen", "sen", "rep", "capt", "lt",
  "col", "sgt", "rev", "president", "senator", "judge", "king", "queen", "prince", "princess",
];

/// Common given names
pub(super) const FIRST_NAMES: &[&str] = &[
  "ian", "john", "james", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
  "charles", "mary", "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica",
  "sarah", "karen", "emma", "olivia", "sophia", "anna", "peter", "paul", "mark", "george",
  "steven", "kevin", "brian", "edward", "jason", "jeff", "tim", "tom", "bill", "steve", "elon",
  "barack", "donald", "joe", "hillary", "angela", "emmanuel", "vladimir", "jack", "harry",
  "oliver", "noah", "liam", "lucas", "max", "alice", "bob", "carol", "eve", "grace", "helen",
  "laura", "maria", "julia", "kate", "claire", "daniel", "matthew", "andrew", "christopher",
  "alexander", "benjamin", "samuel", "henry", "arthur", "hans", "pieter", "jan", "willem",
  "gary", "mike", "dave", "chris", "alex", "sam", "ben", "nick", "amy", "lisa", "nancy",
];

/// Countries, regions, and large cities (multi-word entries joined with one space)
pub(super) const PLACES: &[&str] = &[
  // countries
  "afghanistan", "argentina", "australia", "austria", "belgium", "brazil", "canada", "chile",
  "china", "colombia", "cuba", "denmark", "egypt", "england", "finland", "france", "germany",
  "greece", "hungary", "iceland", "india", "indonesia", "iran", "iraq", "ireland", "israel",
  "italy", "japan", "kenya", "korea", "mexico", "morocco", "netherlands", "holland",
  "new zealand", "nigeria", "norway", "pakistan", "peru", "philippines", "poland", "portugal",
  "russia", "scotland", "singapore", "south africa", "spain", "sweden", "switzerland", "syria",
  "thailand", "turkey", "ukraine", "united kingdom", "united states",
  "united states of america", "america", "usa", "uk", "u.s", "u.k", "vietnam", "wales",
  // regions
  "europe", "asia", "africa", "antarctica", "north america", "south america", "oceania",
  "california", "texas", "florida", "new york", "washington", "ohio", "oregon", "virginia",
  "georgia", "massachusetts", "illinois", "michigan", "arizona", "colorado", "nevada",
  "bavaria", "catalonia", "siberia",
  // cities
  "amsterdam", "athens", "bangkok", "barcelona", "beijing", "berlin", "boston", "brussels",
  "cairo", "chicago", "copenhagen", "delhi", "dublin", "dubai", "edinburgh", "geneva",
  "hamburg", "hong kong", "istanbul", "jakarta", "lagos", "lisbon", "london", "los angeles",
  "madrid", "manchester", "melbourne", "miami", "milan", "montreal", "moscow", "mumbai",
  "munich", "nairobi", "new york city", "osaka", "oslo", "paris", "prague", "rome",
  "rotterdam", "san francisco", "seattle", "seoul", "shanghai", "stockholm", "sydney",
  "tokyo", "toronto", "utrecht", "vancouver", "vienna", "warsaw", "zurich",
];

/// Nationality adjectives (their plurals are recognised too)
pub(super) const DEMONYMS: &[&str] = &[
  "dutch", "english", "american", "british", "french", "german", "italian", "spanish",
  "chinese", "japanese", "russian", "canadian", "mexican", "indian", "australian", "irish",
  "scottish", "welsh", "swedish", "norwegian", "danish", "finnish", "polish", "greek",
  "turkish", "brazilian", "korean", "european", "african", "asian", "egyptian", "israeli",
  "portuguese", "swiss", "belgian", "austrian", "ukrainian", "kenyan", "nigerian",
];

/// Well-known organisations
pub(super) const ORGANIZATIONS: &[&str] = &[
  "google", "microsoft", "apple", "amazon", "facebook", "meta", "ibm", "nasa", "fbi", "cia",
  "un", "nato", "united nations", "european union", "eu", "tesla", "netflix", "intel",
  "nvidia", "oracle", "twitter", "reuters", "bbc", "cnn", "toyota", "samsung", "sony",
  "walmart", "boeing", "unicef", "unesco", "mit", "harvard", "stanford", "yale", "openai",
  "github", "mozilla", "spacex", "shell", "philips", "siemens", "airbus", "volkswagen",
  "congress", "parliament", "senate", "nhs", "who", "imf", "world bank", "red cross",
];

/// Last words that mark an organisation name
pub(super) const ORG_SUFFIXES: &[&str] = &[
  "inc", "corp", "corporation", "ltd", "llc", "plc", "co", "company", "group", "university",
  "college", "bank", "institute", "association", "agency", "foundation", "committee",
  "council", "party", "ministry", "department", "airlines", "technologies", "systems", "labs",
  "partners", "holdings", "times", "post", "journal", "club", "school", "hospital", "church",
  "court", "army", "navy", "union", "fund", "society", "industries", "motors",
];

/// First words that mark an organisation name ("University of ...", "Bank of ...")
pub(super) const ORG_HEADS: &[&str] = &[
  "university", "bank", "department", "ministry", "institute", "college", "church", "museum",
  "house", "office", "board",
];
