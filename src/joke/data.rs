// Built-in joke tables
//
// One canonical table per category. Actions and punchlines are grouped by
// subject so a joke never pairs a cat's action with a robot's punchline.

use super::table::SubjectEntry;

pub const FAMILY_SUBJECTS: &[SubjectEntry] = &[
    SubjectEntry {
        subject: "cat",
        actions: &[
            "chased the laser pointer",
            "took a nap",
            "knocked over the vase",
            "hid in the box",
        ],
        punchlines: &[
            "because it wanted to catch up on dreams!",
            "and then fell asleep immediately.",
            "so the mouse laughed quietly.",
            "and everyone clapped for its courage.",
        ],
    },
    SubjectEntry {
        subject: "dog",
        actions: &[
            "barked at the mailman",
            "chased its tail",
            "tried to sit on the sofa",
            "learned a new trick",
        ],
        punchlines: &[
            "but ended up chasing its tail forever.",
            "and everyone joined in the fun.",
            "so it became a local hero.",
            "and wagged happily all day.",
        ],
    },
    SubjectEntry {
        subject: "grandma",
        actions: &[
            "baked cookies",
            "told a story",
            "tried yoga",
            "joined a dance class",
        ],
        punchlines: &[
            "and everyone enjoyed a cookie!",
            "so the grandchildren laughed loudly.",
            "and joined her in the fun.",
            "because life is sweeter with sugar and love.",
        ],
    },
    SubjectEntry {
        subject: "child",
        actions: &[
            "built a huge tower",
            "painted the wall",
            "asked a million questions",
            "dressed up as a superhero",
        ],
        punchlines: &[
            "and it fell down, but giggled anyway.",
            "so the cat ran away quickly.",
            "and parents were amazed.",
            "because superheroes always save the day.",
        ],
    },
    SubjectEntry {
        subject: "teacher",
        actions: &[
            "gave a pop quiz",
            "told a joke",
            "forgot their marker",
            "danced in class",
        ],
        punchlines: &[
            "and the students cheered.",
            "but everyone laughed instead of studying.",
            "so pencils rolled everywhere.",
            "and the classroom became a dance floor.",
        ],
    },
    SubjectEntry {
        subject: "bird",
        actions: &[
            "sang loudly",
            "stole breadcrumbs",
            "flew into the window",
            "built a nest",
        ],
        punchlines: &[
            "and everyone smiled at the tiny musician.",
            "but it forgot where it built the nest.",
            "so feathers flew everywhere.",
            "and it became the neighborhood star.",
        ],
    },
];

pub const FAMILY_TEMPLATES: &[&str] = &[
    "Why did the {subj} {act}? {punch}",
    "The {subj} {act} - {punch}",
    "When a {subj} {act}, {punch}",
    "Ever seen a {subj} {act}? {punch}",
    "{subj} {act}, and guess what? {punch}",
];

pub const TECH_SUBJECTS: &[SubjectEntry] = &[
    SubjectEntry {
        subject: "programmer",
        actions: &[
            "debugged their code",
            "committed changes",
            "pushed updates",
            "wrote a function",
            "merged branches",
            "forgot a semicolon",
        ],
        punchlines: &[
            "But then realized it was a feature, not a bug.",
            "Turns out, coffee was the real solution.",
            "The code compiled magically, somehow.",
            "And then Googled the error for hours.",
        ],
    },
    SubjectEntry {
        subject: "computer",
        actions: &[
            "rebooted itself",
            "ran out of memory",
            "displayed an error",
            "started overclocking",
        ],
        punchlines: &[
            "And then displayed '404: life not found.'",
            "It only beeped in existential dread.",
            "So it froze in deep thought.",
            "Then restarted like nothing happened.",
        ],
    },
    SubjectEntry {
        subject: "AI",
        actions: &[
            "made a decision",
            "generated a meme",
            "tried to understand emotions",
            "wrote poetry",
        ],
        punchlines: &[
            "It confused everyone except itself.",
            "Ended up writing a poem about its feelings.",
            "Claimed victory over humanity.",
            "Asked existential questions nobody could answer.",
        ],
    },
    SubjectEntry {
        subject: "server",
        actions: &[
            "went down unexpectedly",
            "handled too many requests",
            "refused connections",
            "updated silently",
        ],
        punchlines: &[
            "Everyone panicked for five minutes.",
            "But it handled the mess gracefully.",
            "The logs filled up quickly.",
            "Then crashed politely, sending apologies.",
        ],
    },
    SubjectEntry {
        subject: "router",
        actions: &[
            "dropped packets",
            "restarted unexpectedly",
            "changed its IP address",
            "lost connection",
        ],
        punchlines: &[
            "No packet survived.",
            "Still, the internet crawled along.",
            "It lost its mind and wandered off.",
            "Wi-Fi was blamed by everyone.",
        ],
    },
    SubjectEntry {
        subject: "keyboard",
        actions: &[
            "refused input",
            "typed on its own",
            "went on strike",
            "sent random characters",
        ],
        punchlines: &[
            "Typed random letters for fun.",
            "Nobody noticed the rebellion.",
            "Caps Lock got triggered infinitely.",
            "It became a secret agent in the matrix.",
        ],
    },
    SubjectEntry {
        subject: "robot",
        actions: &[
            "asked for a coffee break",
            "danced unexpectedly",
            "ignored commands",
            "learned a new skill",
        ],
        punchlines: &[
            "It took a selfie and posted it online.",
            "Forgot how to walk during an update.",
            "Started dancing instead of following orders.",
            "Reported a bug in humans.",
        ],
    },
    SubjectEntry {
        subject: "bug",
        actions: &[
            "hid in the code",
            "caused chaos",
            "multiplied quickly",
            "disguised itself as a feature",
        ],
        punchlines: &[
            "No one could ever find it.",
            "It lived happily ever after in production.",
            "Became a legendary feature.",
            "Got squashed... eventually.",
        ],
    },
];

pub const TECH_TEMPLATES: &[&str] = &[
    "Why did the {subj} {act}? {punch}",
    "The {subj} {act}, and then {punch}",
    "What happens when a {subj} {act}? {punch}",
    "Ever seen a {subj} {act}? {punch}",
    "{subj} {act}. {punch}",
];
