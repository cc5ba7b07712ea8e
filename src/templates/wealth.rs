use super::Entries;

pub(super) static EXPRESSION: Entries = &[
    (1, "Expression **{number}** gives {first_name} a talent for leadership and entrepreneurship. Founding, directing and opening new markets suit you."),
    (2, "Expression **{number}** gives {first_name} a talent for diplomacy. Consulting, mediation and partnership-driven roles suit you."),
    (3, "Expression **{number}** gives {first_name} a talent for communication. Creative industries, media and the arts suit you."),
    (4, "Expression **{number}** gives {first_name} a talent for order. Engineering, construction and operations suit you."),
    (5, "Expression **{number}** gives {first_name} a talent for persuasion. Sales, marketing, travel and media suit you."),
    (6, "Expression **{number}** gives {first_name} a talent for care. Education, health and social services suit you."),
    (7, "Expression **{number}** gives {first_name} a talent for analysis. Research, technology and philosophy suit you."),
    (8, "Expression **{number}** gives {first_name} a talent for managing resources. Finance, management and real estate suit you."),
    (9, "Expression **{number}** gives {first_name} a talent for vision. Humanitarian work, art and spiritual guidance suit you."),
    (11, "Master expression **{number}** makes {first_name} an inspirational leader. Roles that move people toward an idea suit you."),
    (22, "Master expression **{number}** makes {first_name} a builder of large projects. Infrastructure and organisations at scale suit you."),
    (33, "Master expression **{number}** makes {first_name} a healer and teacher. Work that heals or educates at scale suits you."),
];

pub(super) static PERSONAL_YEAR: Entries = &[
    (1, "{current_year} favours new starts: launch the venture, take the new role, put your name on something."),
    (2, "{current_year} favours partnerships: the right collaborator is worth more than a fast solo move."),
    (3, "{current_year} favours creative projects and networks: visibility turns into opportunity."),
    (4, "{current_year} favours structuring: fix processes, contracts and finances before expanding."),
    (5, "{current_year} favours change: pivots, new markets and travel bring income."),
    (6, "{current_year} favours responsibility and service: clients and teams reward reliability."),
    (7, "{current_year} favours analysis and strategy: research now, act next year."),
    (8, "{current_year} favours financial growth: negotiate, invest and ask for what you are worth."),
    (9, "{current_year} favours completion: close what no longer pays and clear space for the next cycle."),
];

pub(super) static COMPANY_NUMBER: Entries = &[
    (1, "{company_name} carries company number **{number}**: leadership and originality. It is built to be first in its field."),
    (2, "{company_name} carries company number **{number}**: cooperation and partnerships. It grows through alliances, not solo sprints."),
    (3, "{company_name} carries company number **{number}**: creativity, media and marketing. Expect visibility, and watch the risk of scattering focus."),
    (4, "{company_name} carries company number **{number}**: stability. Good for construction, finance and consulting, slow to innovate."),
    (5, "{company_name} carries company number **{number}**: change and movement. Good for tourism and e-commerce, hard to keep steady."),
    (6, "{company_name} carries company number **{number}**: care and service. Good for health, education and retail."),
    (7, "{company_name} carries company number **{number}**: analysis and expertise. Good for technology and research."),
    (8, "{company_name} carries company number **{number}**: power and abundance, the golden number for finance and real estate."),
    (9, "{company_name} carries company number **{number}**: humanitarian reach. Good for social enterprises and global causes."),
    (11, "{company_name} carries master number **{number}**: inspiration and vision. A brand that can lead a movement."),
    (22, "{company_name} carries master number **{number}**: the master builder. Made for large, lasting institutions."),
    (33, "{company_name} carries master number **{number}**: the master healer. Made for companies that serve and teach."),
];

pub(super) static REGISTRATION_ENERGY: Entries = &[
    (1, "Registration energy **{number}**: the company was born to pioneer. Momentum comes from bold first moves."),
    (2, "Registration energy **{number}**: the company was born for partnership. Contracts and alliances carry it."),
    (3, "Registration energy **{number}**: the company was born to communicate. Brand and storytelling carry it."),
    (4, "Registration energy **{number}**: the company was born to build steadily. Process and patience carry it."),
    (5, "Registration energy **{number}**: the company was born in motion. Adaptability carries it; rigidity stalls it."),
    (6, "Registration energy **{number}**: the company was born to serve. Customer loyalty carries it."),
    (7, "Registration energy **{number}**: the company was born to specialise. Expertise carries it."),
    (8, "Registration energy **{number}**: the company was born to scale. Capital and authority carry it."),
    (9, "Registration energy **{number}**: the company was born to complete cycles. Purpose carries it."),
    (11, "Registration energy **{number}**: the company was born under inspiration. Vision carries it when execution keeps up."),
    (22, "Registration energy **{number}**: the company was born to build something large. Long horizons carry it."),
    (33, "Registration energy **{number}**: the company was born to heal. Service at scale carries it."),
];

pub(super) static SHADOW: Entries = &[
    (1, "The shadow of {company_name} is ego: leaders who stop listening to their team and their market."),
    (2, "The shadow of {company_name} is indecision: waiting for consensus while opportunities pass."),
    (3, "The shadow of {company_name} is scatter: too many projects started, too few finished."),
    (4, "The shadow of {company_name} is rigidity: clinging to the old way after the market has moved."),
    (5, "The shadow of {company_name} is instability: constant pivots that burn cash and trust."),
    (6, "The shadow of {company_name} is over-giving: discounts and favours that erode margins."),
    (7, "The shadow of {company_name} is secrecy: good work nobody hears about."),
    (8, "The shadow of {company_name} is greed: growth that outruns its foundations."),
    (9, "The shadow of {company_name} is drift: a mission so broad it never turns a profit."),
    (11, "The shadow of {company_name} is nervous vision: ideas that never touch the ground."),
    (22, "The shadow of {company_name} is overreach: plans too large for current resources."),
    (33, "The shadow of {company_name} is martyrdom: serving everyone except its own balance sheet."),
];
