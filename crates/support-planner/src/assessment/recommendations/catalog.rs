use super::ItemTemplate;

pub(super) const SOUND_MANAGEMENT: ItemTemplate = ItemTemplate {
    title: "Sound Management",
    suggestions: &[
        "Provide noise-canceling headphones or earplugs for loud environments",
        "Create a quiet, calm retreat space at home with soft furnishings",
        "Give advance warning before loud activities (vacuum, blender, etc.)",
        "Use white noise machines or calming music for sleep",
        "Consider sound-dampening materials in frequently used rooms",
    ],
};

pub(super) const VISUAL_ENVIRONMENT: ItemTemplate = ItemTemplate {
    title: "Visual Environment",
    suggestions: &[
        "Install dimmer switches or use lamps with adjustable brightness",
        "Provide sunglasses for outdoor activities and bright indoor spaces",
        "Avoid fluorescent lighting when possible - use warm LED bulbs",
        "Use blackout curtains for sleep environment",
        "Reduce screen brightness on devices",
    ],
};

pub(super) const FOOD_AND_NUTRITION: ItemTemplate = ItemTemplate {
    title: "Food & Nutrition Support",
    suggestions: &[
        "Introduce new foods gradually alongside preferred items",
        "Respect texture preferences without forcing foods",
        "Offer foods in preferred temperatures (warm vs cold)",
        "Try food chaining technique: gradually modify accepted foods",
        "Consult occupational therapist for feeding therapy if needed",
        "Consider vitamin supplements if diet is very limited (after consulting doctor)",
    ],
};

pub(super) const CLOTHING_COMFORT: ItemTemplate = ItemTemplate {
    title: "Clothing Comfort",
    suggestions: &[
        "Remove all clothing tags before wearing",
        "Choose seamless or flat-seam clothing options",
        "Use soft, breathable fabrics (100% cotton, bamboo, modal)",
        "Allow choice in clothing selection whenever possible",
        "Wash new clothes 2-3 times before wearing to soften",
        "Consider compression clothing if seeking pressure input",
    ],
};

pub(super) const EYE_CONTACT_ALTERNATIVES: ItemTemplate = ItemTemplate {
    title: "Eye Contact Alternatives",
    suggestions: &[
        "Accept looking at nose, mouth, or forehead as valid attention",
        "Don't force eye contact during conversations",
        "Use side-by-side activities for bonding (walking, driving, crafts)",
        "Understand that listening doesn't require eye contact",
        "Focus on the quality of interaction, not eye contact",
    ],
};

pub(super) const UNDERSTANDING_SOCIAL_CUES: ItemTemplate = ItemTemplate {
    title: "Understanding Social Cues",
    suggestions: &[
        "Teach emotion recognition using picture cards and emotion charts",
        "Explain facial expressions explicitly with examples",
        "Use concrete examples for abstract social concepts",
        "Practice identifying emotions in TV shows or books together",
        "Use apps or videos designed for emotion learning",
        "Break down complex social situations into clear steps",
    ],
};

pub(super) const SOCIAL_SKILLS_PRACTICE: ItemTemplate = ItemTemplate {
    title: "Social Skills Practice",
    suggestions: &[
        "Use social stories to teach greetings and common interactions",
        "Practice social scenarios in low-pressure environments",
        "Model appropriate greetings naturally without pressure",
        "Role-play challenging social situations at home",
        "Celebrate small social successes to build confidence",
        "Consider joining social skills groups with similar peers",
    ],
};

pub(super) const BUILDING_SOCIAL_CONFIDENCE: ItemTemplate = ItemTemplate {
    title: "Building Social Confidence",
    suggestions: &[
        "Start with one-on-one interactions before introducing groups",
        "Identify and nurture special interests as social connection points",
        "Allow adequate processing time after social situations",
        "Provide scripts for common social scenarios (ordering food, asking for help)",
        "Respect the need for social breaks and quiet time",
        "Find activities where social rules are clear (structured games, sports)",
    ],
};

pub(super) const MANAGING_TRANSITIONS: ItemTemplate = ItemTemplate {
    title: "Managing Changes & Transitions",
    suggestions: &[
        "Provide advance notice of schedule changes using visual calendars",
        "Use countdown timers for transitions (Time Timer apps work well)",
        "Create and maintain visual schedules for daily routines",
        "Give multiple warnings before transitions: '5 minutes', '2 minutes', '1 minute'",
        "Maintain consistent morning and bedtime routines",
        "Prepare for major changes (school start, vacations) weeks in advance",
    ],
};

pub(super) const REPETITIVE_BEHAVIORS: ItemTemplate = ItemTemplate {
    title: "Understanding Repetitive Behaviors",
    suggestions: &[
        "Accept harmless repetitive behaviors as self-regulation strategies",
        "Provide appropriate sensory outlets (fidget tools, stress balls, textured items)",
        "Identify triggers that increase repetitive behaviors (stress, overstimulation)",
        "Don't suppress behaviors unless harmful - redirect gently if needed",
        "Use repetitive behaviors as calming strategies before stressful events",
        "Channel repetitive interests into productive activities",
    ],
};

pub(super) const INTENSE_INTERESTS: ItemTemplate = ItemTemplate {
    title: "Leveraging Intense Interests",
    suggestions: &[
        "Use special interests as powerful learning motivators across subjects",
        "Incorporate interests into reading, writing, and math activities",
        "Connect with others who share the interest (clubs, online communities)",
        "Channel interests into potential career exploration paths",
        "Respect and celebrate the depth of knowledge and passion",
        "Use interests to teach social skills (sharing information, turn-taking)",
        "Create opportunities to present or teach about special interests",
    ],
};

pub(super) const AAC: ItemTemplate = ItemTemplate {
    title: "Alternative & Augmentative Communication (AAC)",
    suggestions: &[
        "Explore AAC devices or apps (Proloquo2Go, TouchChat, Avaz)",
        "Implement Picture Exchange Communication System (PECS)",
        "Teach basic functional sign language for immediate needs",
        "Provide visual choice boards for daily activities",
        "Consult with speech-language pathologist for personalized plan",
        "Celebrate and encourage all communication attempts",
        "Use visual supports like NOW/NEXT boards",
    ],
};

pub(super) const EMOTIONAL_EXPRESSION: ItemTemplate = ItemTemplate {
    title: "Emotional Expression & Regulation",
    suggestions: &[
        "Use emotion charts and visual scales (thermometer, zones of regulation)",
        "Teach feelings vocabulary explicitly with real-life examples",
        "Practice identifying emotions in stories, videos, and real situations",
        "Create a feelings journal using drawings or pictures",
        "Use regular 'emotion check-ins' at set times daily",
        "Model expressing your own emotions clearly and appropriately",
        "Teach coping strategies for different emotional states",
    ],
};

pub(super) const FIGURATIVE_LANGUAGE: ItemTemplate = ItemTemplate {
    title: "Understanding Figurative Language",
    suggestions: &[
        "Avoid idioms, sarcasm, and figures of speech initially",
        "Explain metaphors and idioms when they come up naturally",
        "Use concrete, literal language for instructions and requests",
        "Teach common idioms explicitly with visual representations",
        "Be patient with questions about meaning - they're learning!",
        "Use humor that's more straightforward (slapstick vs sarcasm)",
        "Create an 'idiom dictionary' for commonly used phrases",
    ],
};

pub(super) const EARLY_LEARNING: ItemTemplate = ItemTemplate {
    title: "Early Learning Activities",
    suggestions: &[
        "Sensory play: water tables, sand, playdough, slime",
        "Simple puzzles and matching games to build cognitive skills",
        "Music and movement activities (dancing, instruments)",
        "Art exploration: finger painting, coloring, cutting, pasting",
        "Building blocks and construction toys (Duplo, Mega Bloks)",
        "Story time with visual books and interactive elements",
    ],
};

pub(super) const MIDDLE_CHILDHOOD: ItemTemplate = ItemTemplate {
    title: "Middle Childhood Activities",
    suggestions: &[
        "STEM projects: science experiments, engineering challenges",
        "Art classes: drawing, painting, sculpture, digital art",
        "Music lessons on an instrument of interest",
        "Coding and robotics activities (Scratch, Lego Mindstorms)",
        "Strategy board games and logic puzzles",
        "Nature exploration: hiking, bird watching, collecting hobbies",
        "Sports with clear rules and individual focus",
    ],
};

pub(super) const TEEN_AND_ADULT: ItemTemplate = ItemTemplate {
    title: "Teen & Adult Development",
    suggestions: &[
        "Advanced hobby development and mastery",
        "Volunteer work in areas of interest to build skills",
        "Online courses in special interest areas",
        "Creative outlets: writing, digital art, music production, video editing",
        "Job skills training and internship programs",
        "Peer groups focused on shared interests",
        "Life skills practice: cooking, budgeting, time management",
    ],
};

pub(super) const PHYSICAL_ACTIVITIES: ItemTemplate = ItemTemplate {
    title: "Physical Activities & Exercise",
    suggestions: &[
        "Swimming - excellent full-body sensory activity",
        "Walking or hiking in nature",
        "Yoga or gentle stretching routines",
        "Martial arts - structured, predictable, confidence-building",
        "Individual sports with less social pressure (track, cycling)",
        "Dance or movement therapy",
        "Trampoline or bouncing activities for sensory input",
    ],
};

pub(super) const SLEEP_AND_REST: ItemTemplate = ItemTemplate {
    title: "Sleep & Rest",
    suggestions: &[
        "Maintain consistent bedtime routine (same time, same order)",
        "Create calm, dark sleeping environment (blackout curtains, minimal decoration)",
        "Limit screens and stimulating activities 1 hour before bed",
        "Use weighted blankets if deep pressure is calming",
        "Consider melatonin supplementation (consult doctor first)",
        "Keep bedroom temperature cool (68-72°F ideal)",
    ],
};

pub(super) const NUTRITION_AWARENESS: ItemTemplate = ItemTemplate {
    title: "Nutrition Awareness",
    suggestions: &[
        "Be aware of potential food sensitivities (gluten, dairy, artificial colors)",
        "Maintain regular meal times to support predictability",
        "Ensure adequate hydration throughout the day",
        "Consider vitamin supplementation: B6, magnesium, omega-3 (doctor-approved)",
        "Don't force foods but gently encourage variety",
        "Involve in meal planning and preparation when possible",
    ],
};

pub(super) const CAREGIVER_SUPPORT: ItemTemplate = ItemTemplate {
    title: "Family & Caregiver Support",
    suggestions: &[
        "Join parent support groups (online or local chapters)",
        "Practice self-care as caregiver - you can't pour from empty cup",
        "Educate siblings and extended family about needs and strengths",
        "Celebrate neurodiversity and unique abilities",
        "Connect with autism advocacy organizations (Autism Society, ASAN)",
        "Build a support team: doctors, therapists, educators, friends",
        "Don't be afraid to ask for help when needed",
    ],
};
