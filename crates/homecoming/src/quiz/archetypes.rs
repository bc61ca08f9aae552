use serde::Serialize;

use super::ArchetypeKey;

/// Static display copy for one archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArchetypeDescriptor {
    pub key: ArchetypeKey,
    pub name: &'static str,
    pub quote: &'static str,
    pub description: &'static str,
    pub core_desire: &'static str,
    pub recommendation: &'static str,
    pub service: &'static str,
    pub keywords: [&'static str; 3],
}

static ARCHETYPES: [ArchetypeDescriptor; 4] = [
    ArchetypeDescriptor {
        key: ArchetypeKey::A,
        name: "Archive Keeper",
        quote: "\"Your heart is a library of moments, and every memory is an irreplaceable treasure.\"",
        description: "You are not one to dwell in the past, but one who holds the deepest reverence for what is real. The foundation of your world is built not upon grand possibilities, but upon the tangible warmth of what has been: the touch of a loved one's hand, the color of an afternoon sunbeam, the echo of unrepeatable laughter. For you, the meaning of life is not found in exploring unknown universes, but in validating and cherishing the unique one you already possess. You believe it is these authentic connections and experiences that define who you are.",
        core_desire: "To know that the life you truly lived was beautiful, complete, and will be remembered.",
        recommendation: "Let us, together with you, curate the most precious collection of your life with the reverence of an archivist. We will connect these authentic moments of brilliance, allowing you to make one final warm pilgrimage through the memorial hall you built with your own hands.",
        service: "Corridor of Life",
        keywords: ["Reality", "Past", "Memory"],
    },
    ArchetypeDescriptor {
        key: ArchetypeKey::B,
        name: "Future Explorer",
        quote: "\"The stars you couldn't reach are still your soul's true home.\"",
        description: "Your spirit has always lived beyond the horizon. The rules and limitations of the physical world are, to you, merely a temporary starting point to be transcended. Your inner \"reality\" is a grander, freer universe composed of infinite \"what ifs\" and \"could have beens.\" You seek not to escape, but to explore; not to forget, but to fulfill. You believe the ultimate meaning of life lies in experiencing the possibilities missed for any reason, in finally breaking free from physical shackles to let your tireless imagination embark on a truly untethered voyage.",
        core_desire: "To finally experience the boundless freedom of your own imagination, unchained from reality.",
        recommendation: "Your ultimate desire is our highest mission. You will become the captain of your final voyage. Whether sailing among the stars or awakening in a world entirely built by your imagination, our \"Dream Architects\" will chart the most detailed star maps to ensure your soul reaches its true home.",
        service: "Utopia",
        keywords: ["Possibility", "Future", "Dream"],
    },
    ArchetypeDescriptor {
        key: ArchetypeKey::C,
        name: "The Life Architect",
        quote: "\"Your life is not a story that happened to you; it is a monument you built with your own hands.\"",
        description: "For you, life is a project to be meticulously planned, executed, and completed. Chaos and randomness bring you unease, while order, logic, and achievement provide the deepest satisfaction. Every decision you've made was a blueprint; every accomplishment, a cornerstone. You are proud of the monument you have built, and you wish for every detail of it to be accurately understood and recorded. Your farewell should not be a casual curtain fall, but the final, perfect closing statement of your life's work: a solemn topping-out ceremony for the structure you have built.",
        core_desire: "To have the final say on your own story, ensuring your legacy is recorded with the precision and dignity it deserves.",
        recommendation: "You will serve as the \"Executive Producer\" of your life's film. Together with our memory engineers, you will personally select, arrange, and approve every highlight of your lifetime. We provide not a passive replay of memories, but a fully equipped editing suite that puts you in control of your final narrative.",
        service: "Corridor of Life",
        keywords: ["Control", "Order", "Achievement"],
    },
    ArchetypeDescriptor {
        key: ArchetypeKey::D,
        name: "Romantic Poet",
        quote: "\"You did not just live life; you felt its texture, its music, its beautiful sorrow.\"",
        description: "You experience the world with the eyes of an artist and the soul of a poet. To you, an event itself is far less important than the \"feeling\" it evokes and the \"meaning\" behind it. You find poetry in the mundane, taste the transience in joy, and can even perceive a profound and sublime beauty in sorrow. You seek not happiness, but the intensity and depth of \"experience.\" You believe the final chapter of life is not a \"problem\" to be solved, but the grandest \"mystery\" to be lived. Your farewell, by right, should be a work of art.",
        core_desire: "To transform your final moment into a work of art, a final, beautiful stanza in the poem of your existence.",
        recommendation: "Your soul is the canvas, and our technology is the brush. We will collaborate with you to create your ultimate masterpiece. Whether becoming a butterfly dissolving in Monet's garden or merging your consciousness into an endless symphony, our cutting-edge dream technology will ensure your farewell is a unique, breathtaking, purely aesthetic experience.",
        service: "Utopia",
        keywords: ["Beauty", "Meaning", "Experience"],
    },
];

pub fn lookup_archetype(key: ArchetypeKey) -> &'static ArchetypeDescriptor {
    &ARCHETYPES[key.index()]
}

pub fn all_archetypes() -> &'static [ArchetypeDescriptor] {
    &ARCHETYPES
}
