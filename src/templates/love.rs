use super::Entries;

pub(super) static SOUL_URGE: Entries = &[
    (1, "In love, soul urge **{number}** wants admiration and room to lead. {first_name} falls for strength and quietly resents being managed."),
    (2, "In love, soul urge **{number}** wants closeness above all. {first_name} needs daily proof of affection and hears distance as rejection."),
    (3, "In love, soul urge **{number}** wants play and lightness. {first_name} loves with laughter and struggles when a relationship turns heavy."),
    (4, "In love, soul urge **{number}** wants loyalty and a shared plan. {first_name} shows love through reliability more than words."),
    (5, "In love, soul urge **{number}** wants excitement and air. {first_name} stays where freedom is offered and leaves where it is rationed."),
    (6, "In love, soul urge **{number}** wants a home and a family feeling. {first_name} gives devotedly and expects the same devotion back."),
    (7, "In love, soul urge **{number}** wants depth and understanding without many words. {first_name} opens slowly and only to someone who can wait."),
    (8, "In love, soul urge **{number}** wants a partner of equal stature. {first_name} respects ambition and tests people before trusting them."),
    (9, "In love, soul urge **{number}** wants a love that means something beyond the two of you. {first_name} forgives a lot and remembers everything."),
    (11, "In love, master soul urge **{number}** wants a spiritual bond. {first_name} senses the partner's moods before they are spoken."),
    (22, "In love, master soul urge **{number}** wants to build a life together, brick by brick. {first_name} thinks in decades, not seasons."),
    (33, "In love, master soul urge **{number}** wants to heal and be healed. {first_name} must guard against loving as a rescue mission."),
];

pub(super) static PERSONAL_YEAR: Entries = &[
    (1, "new beginnings and fresh independence"),
    (2, "relationships, partnership and cooperation"),
    (3, "creativity, flirtation and social life"),
    (4, "work, structure and practical commitments"),
    (5, "change, adventure and unexpected turns"),
    (6, "responsibility, family and home"),
    (7, "inner discovery and a need for solitude"),
    (8, "power, success and material goals"),
    (9, "endings, release and closing old chapters"),
];

pub(super) static SHADOW: Entries = &[
    (1, "{partner_name} carries a fear of losing independence. When closeness grows, {partner_name} finds a reason to step back."),
    (2, "{partner_name} carries a fear of rejection. Behind the easy agreement there is a constant search for approval."),
    (3, "{partner_name} scatters energy to avoid depth. Jokes arrive exactly when a serious conversation should."),
    (4, "{partner_name} fears change and clings to routine. Surprises feel like threats, even the loving ones."),
    (5, "{partner_name} fears commitment. The word 'forever' quietly tightens something in the chest."),
    (6, "{partner_name} hides behind perfectionism and self-sacrifice. Giving too much is how control is kept."),
    (7, "{partner_name} retreats into silence. Distance is used as protection, and you may read it as coldness."),
    (8, "{partner_name} needs to stay in control. Vulnerability feels like losing a negotiation."),
    (9, "{partner_name} sacrifices personal needs and then resents it. Old wounds get carried into new rooms."),
    (11, "{partner_name} is overwhelmed by sensitivity. Small tensions are felt as storms."),
    (22, "{partner_name} puts the plan before the person. Love waits while the next project is built."),
    (33, "{partner_name} tries to save everyone. The relationship risks becoming another rescue."),
];
