use super::Entries;

pub(super) static EXPRESSION: Entries = &[
    (
        1,
        "Your destiny code is **1**, the number of the pioneer. Since {year} you have been learning that walking first also means walking alone.\n\n\
         The initial **{first_initial}** is your armour. Beneath it sits someone who still waits to be asked instead of always leading. The name {last_name} carries a stubborn line of people who refused to follow.\n\n\
         Your task is not to win every room, {first_name}. It is to stay yourself once you have stopped fighting.",
    ),
    (
        2,
        "Your expression number is **2**, the number of pairs and of the longing to belong to someone. However strong you look outside, inside there is a soul that wants to be held.\n\n\
         You played the strong one for so long that the child who needs closeness lost its voice. Born on {day} {month_name}, you were given a sensitivity that most people around you never see.\n\n\
         {first_name}, softness is not your weakness. Hiding it is.",
    ),
    (
        3,
        "Your expression number is **3**, the number of words, colour and stage light. People see someone witty and bright at the centre of the table.\n\n\
         Three is the artist. The melody inside the name {first_name} keeps pulling you toward language, yet you scatter that gift across too many half-finished beginnings.\n\n\
         Pick one story and finish it. Your voice grows heavier when it stops trying to please everyone.",
    ),
    (
        4,
        "Your expression number is **4**, the number of foundations and four solid walls. You build systems, keep promises and make chaos manageable for others.\n\n\
         The ordered vibration of {first_name} wants your life to run on rails. Life does not. Born {day} {month_name} {year}, you received a practical mind and a dreamer you keep locked in the basement.\n\n\
         Let the dreamer out once in a while. The walls will still be standing.",
    ),
    (
        5,
        "Your expression number is **5**, the dance of change. You push limits, run from routine and reinvent yourself faster than others can keep up.\n\n\
         Yet your freedom often means flying from one cage into the next. When you arrived in {year} your soul already knew this world would try to hold you still.\n\n\
         {first_name} {last_name}, the fifth vibration is a song about chains. Freedom that never stays anywhere is just another kind of running.",
    ),
    (
        6,
        "Your expression number is **6**, the number of care and of the home others come back to. You carry people, often more than they ask you to.\n\n\
         The name {first_name} holds a protective vibration. It also holds a quiet bill you never send: the expectation that love will be returned in the same measure.\n\n\
         Serve because you choose to, not because you fear being left. That is where your strength turns into peace.",
    ),
    (
        7,
        "Your expression number is **7**, the number of the seeker. You read between the lines, distrust easy answers and keep a private room no one may enter.\n\n\
         Born on {day} {month_name}, you were handed an analytical mind and a long loneliness to go with it. The surname {last_name} adds depth and an inherited silence.\n\n\
         {first_name}, wisdom kept entirely to yourself slowly turns into isolation. Let one person into that room.",
    ),
    (
        8,
        "Your expression number is **8**, the number of power, money and authority. You understand how the material world works and you know how to make it move.\n\n\
         Eight is also the number of balance. Everything you take is eventually weighed. The initial **{first_initial}** gives you command; the rest of your name asks what that command is for.\n\n\
         Success will come, {first_name}. The question is whether you will still recognise yourself when it does.",
    ),
    (
        9,
        "Your expression number is **9**, the number of endings and of the whole circle. You feel the world's weight and often carry pain that is not yours.\n\n\
         Nine completes what others leave unfinished. Since {year} you have been closing doors other people opened and forgot.\n\n\
         {first_name} {last_name}, compassion without limits becomes self-erasure. Finish what is yours and let the rest go.",
    ),
    (
        11,
        "Your expression number is the master number **11**, the channel of intuition and inspiration. You sense things before they happen and often before you can explain them.\n\n\
         Eleven is a high voltage line. It lights rooms and it burns the wire that carries it. Your nervous system pays for every vision.\n\n\
         {first_name}, ground yourself. An inspired person who never sleeps soon inspires no one.",
    ),
    (
        22,
        "Your expression number is the master number **22**, the master builder. You can turn large visions into structures that outlive you.\n\n\
         The burden of twenty-two is scale. Small goals bore you and large ones crush you. Born {day} {month_name} {year}, you carry the pressure of plans bigger than a single life.\n\n\
         Build one stone at a time, {first_name}. Cathedrals were never raised in a year.",
    ),
    (
        33,
        "Your expression number is the master number **33**, the master teacher and healer. People bring you their wounds without being asked.\n\n\
         Thirty-three asks for devotion and forgets to ask who looks after the healer. Your name {first_name} {last_name} vibrates with a service that can empty you.\n\n\
         Teach by living well. The world needs you whole, not sacrificed.",
    ),
];

pub(super) static SOUL_URGE: Entries = &[
    (
        1,
        "Your soul urge is **1**. Deep down you want to be the author of your own life and you hate asking for permission.\n\n\
         {first_name}, your vowels speak of a need to be seen as capable. When no one notices, you push harder instead of resting.",
    ),
    (
        2,
        "Your soul urge is **2**. What you secretly long for is a partner in everything, someone whose presence makes the world quieter.\n\n\
         {first_name}, you hear every unspoken word in a room. That gift becomes a wound when you make yourself smaller to keep the peace.",
    ),
    (
        3,
        "Your soul urge is **3**. You want joy, expression and an audience that laughs at the right moment.\n\n\
         Beneath the brightness lives a fear of being boring or unloved. {first_name}, you do not need to perform to deserve a place at the table.",
    ),
    (
        4,
        "Your soul urge is **4**. Your heart wants safety: a plan, a home, a future you can count on.\n\n\
         {first_name}, you mistake control for calm. Some of your best days will be the ones you did not schedule.",
    ),
    (
        5,
        "Your soul urge is **5**. Inside you runs a restless wind that wants new roads, new faces and no locked doors.\n\n\
         {first_name}, you fear being trapped more than being alone. Ask yourself which of those two is really chasing you.",
    ),
    (
        6,
        "Your soul urge is **6**. You long to be needed, to keep a warm house and to make the people you love whole again.\n\n\
         {first_name}, you give before anyone asks. Learn to receive without keeping score.",
    ),
    (
        7,
        "Your soul urge is **7**. What you really want is truth: the hidden rule behind things and a silence deep enough to hear it.\n\n\
         {first_name}, solitude restores you. Isolation is its shadow, and you sometimes confuse the two.",
    ),
    (
        8,
        "Your soul urge is **8**. Underneath it all you want to matter, to hold influence and never depend on anyone again.\n\n\
         {first_name}, that hunger was born from an old fear of powerlessness. Power chosen from calm is stronger than power grabbed from fear.",
    ),
    (
        9,
        "Your soul urge is **9**. Your heart wants a world that is kinder than the one it found.\n\n\
         {first_name}, you forgive others easily and yourself almost never. Turn a little of that compassion inward.",
    ),
    (
        11,
        "Your soul urge is the master number **11**. You long for meaning, for a sign that your sensitivity has a purpose.\n\n\
         {first_name}, your intuition is rarely wrong. Your doubt about it is what costs you.",
    ),
    (
        22,
        "Your soul urge is the master number **22**. Your heart wants to leave something lasting behind, a structure others can live inside.\n\n\
         {first_name}, the size of that wish can paralyse you. Start with what can be finished this year.",
    ),
    (
        33,
        "Your soul urge is the master number **33**. You want to heal, to teach, to hold the world gently.\n\n\
         {first_name}, you cannot pour from an empty vessel. Your own care is part of the work.",
    ),
];

pub(super) static PERSONALITY: Entries = &[
    (
        1,
        "Your personality number is **1**. People meet someone decisive, direct and a little intimidating. They rarely see how much you doubt yourself after the door closes, {first_name}.",
    ),
    (
        2,
        "Your personality number is **2**. You come across as gentle, approachable and easy to trust. Some mistake that gentleness for weakness, {first_name}, and learn otherwise too late.",
    ),
    (
        3,
        "Your personality number is **3**. The first impression you leave is warmth and wit. The mask is charming, {first_name}, but it tires you more than anyone guesses.",
    ),
    (
        4,
        "Your personality number is **4**. You look reliable, serious and organised, the person others hand the keys to. Behind that frame, {first_name}, there is more playfulness than you allow anyone to see.",
    ),
    (
        5,
        "Your personality number is **5**. You appear lively, curious and magnetic. People feel you might leave at any moment, {first_name}, and that keeps them leaning in.",
    ),
    (
        6,
        "Your personality number is **6**. Others see a caretaker, someone safe and responsible. They bring their troubles to you, {first_name}, often before asking how you are.",
    ),
    (
        7,
        "Your personality number is **7**. You come across as reserved, observant and hard to read. Distance protects you, {first_name}, but it also keeps the right people away.",
    ),
    (
        8,
        "Your personality number is **8**. You project authority and competence. People assume you have everything under control, {first_name}, so nobody offers help when you need it.",
    ),
    (
        9,
        "Your personality number is **9**. You appear wise, generous and a little older than your years. Strangers open up to you, {first_name}, and you rarely return the favour.",
    ),
    (
        11,
        "Your personality number is the master number **11**. You radiate something people cannot name, an intensity that draws some and unsettles others, {first_name}.",
    ),
    (
        22,
        "Your personality number is the master number **22**. You look like someone who gets large things done. That reputation is earned, {first_name}, and it is heavy.",
    ),
    (
        33,
        "Your personality number is the master number **33**. You come across as nurturing and deeply kind. Guard that kindness, {first_name}; not everyone who takes it deserves it.",
    ),
];

pub(super) static PERSONAL_YEAR: Entries = &[
    (
        1,
        "**Personal Year 1**: a year of new beginnings. Start projects, take the lead and plant seeds. Watch your impatience; great things still take time.\n\n\
         {current_year} is a turning point, {first_name}. The decisions you make now will shape the next nine years.",
    ),
    (
        2,
        "**Personal Year 2**: a year of relationships and cooperation. Patience and diplomacy win this year; rushed decisions do not.\n\n\
         {current_year} works like a mirror, {first_name} {last_name}. The people you meet will show you parts of yourself you have not accepted yet.",
    ),
    (
        3,
        "**Personal Year 3**: a year of creativity and social life. Express yourself, widen your circle and make things. Beware of scattering your energy.\n\n\
         {first_name}, interest is not the same as completion. Finish at least one thing you start in {current_year}.",
    ),
    (
        4,
        "**Personal Year 4**: a year of work and structure. Build foundations, fix what is broken and do the unglamorous tasks.\n\n\
         {first_name}, {current_year} rewards discipline. What you lay down now will carry weight for years.",
    ),
    (
        5,
        "**Personal Year 5**: a year of change and movement. Travel, new people and sudden turns arrive. Stay flexible, not reckless.\n\n\
         {first_name}, in {current_year} the door you fear opening is probably the one worth walking through.",
    ),
    (
        6,
        "**Personal Year 6**: a year of responsibility, family and home. Commitments deepen and others will lean on you.\n\n\
         {first_name}, in {current_year} care for others without abandoning yourself.",
    ),
    (
        7,
        "**Personal Year 7**: a year of inner work. Study, rest and reflect. Outer results slow down so inner clarity can grow.\n\n\
         {first_name}, {current_year} asks for silence. Answers will come once you stop chasing them.",
    ),
    (
        8,
        "**Personal Year 8**: a year of power and harvest. Career, money and recognition move forward if you step up.\n\n\
         {first_name}, in {current_year} ambition pays off. Keep your ethics, because eight always balances its books.",
    ),
    (
        9,
        "**Personal Year 9**: a year of endings and release. Close chapters, forgive and clear space for the cycle that begins next year.\n\n\
         {first_name}, {current_year} is not the time to start something big. It is the time to let go gracefully.",
    ),
];

pub(super) static LIFE_PATH: Entries = &[
    (
        1,
        "Your life path is **1**: leadership and independence. You are here to learn to stand on your own, {first_name}.",
    ),
    (
        2,
        "Your life path is **2**: diplomacy and harmony. You are here to learn partnership without losing yourself, {first_name}.",
    ),
    (
        3,
        "Your life path is **3**: creativity and expression. You are here to give shape to what you feel, {first_name}.",
    ),
    (
        4,
        "Your life path is **4**: discipline and stability. You are here to build what lasts, {first_name}.",
    ),
    (
        5,
        "Your life path is **5**: freedom and change. You are here to learn that freedom needs direction, {first_name}.",
    ),
    (
        6,
        "Your life path is **6**: responsibility and love. You are here to care without carrying everyone, {first_name}.",
    ),
    (
        7,
        "Your life path is **7**: analysis and spirituality. You are here to seek truth and share it, {first_name}.",
    ),
    (
        8,
        "Your life path is **8**: power and abundance. You are here to master the material world with integrity, {first_name}.",
    ),
    (
        9,
        "Your life path is **9**: compassion and completion. You are here to serve something larger than yourself, {first_name}.",
    ),
    (
        11,
        "Your life path is the master number **11**: intuition and inspiration. You are here to light the way for others, {first_name}.",
    ),
    (
        22,
        "Your life path is the master number **22**: the master builder. You are here to turn vision into lasting form, {first_name}.",
    ),
    (
        33,
        "Your life path is the master number **33**: the master teacher. You are here to heal through love and example, {first_name}.",
    ),
];
