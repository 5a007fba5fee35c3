// Closed value sets accepted in command payloads.
//
// Payloads carry these as plain strings; membership is checked by exact,
// case-sensitive comparison against each member's canonical name.

/// An enumeration whose members are matched by canonical name.
pub trait CanonicalName: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn canonical_name(&self) -> &'static str;

    fn from_canonical_name(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|member| member.canonical_name() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    Idn,
    Ascii,
}

impl CanonicalName for DomainType {
    const ALL: &'static [Self] = &[DomainType::Idn, DomainType::Ascii];

    fn canonical_name(&self) -> &'static str {
        match self {
            DomainType::Idn => "IDN",
            DomainType::Ascii => "ASCII",
        }
    }
}

/// RDAP status vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Validated,
    RenewProhibited,
    UpdateProhibited,
    TransferProhibited,
    DeleteProhibited,
    Proxy,
    Private,
    Removed,
    Obscured,
    Associated,
    Active,
    Inactive,
    Locked,
    PendingCreate,
    PendingRenew,
    PendingTransfer,
    PendingUpdate,
    PendingDelete,
}

impl CanonicalName for Status {
    const ALL: &'static [Self] = &[
        Status::Validated,
        Status::RenewProhibited,
        Status::UpdateProhibited,
        Status::TransferProhibited,
        Status::DeleteProhibited,
        Status::Proxy,
        Status::Private,
        Status::Removed,
        Status::Obscured,
        Status::Associated,
        Status::Active,
        Status::Inactive,
        Status::Locked,
        Status::PendingCreate,
        Status::PendingRenew,
        Status::PendingTransfer,
        Status::PendingUpdate,
        Status::PendingDelete,
    ];

    fn canonical_name(&self) -> &'static str {
        match self {
            Status::Validated => "validated",
            Status::RenewProhibited => "renew prohibited",
            Status::UpdateProhibited => "update prohibited",
            Status::TransferProhibited => "transfer prohibited",
            Status::DeleteProhibited => "delete prohibited",
            Status::Proxy => "proxy",
            Status::Private => "private",
            Status::Removed => "removed",
            Status::Obscured => "obscured",
            Status::Associated => "associated",
            Status::Active => "active",
            Status::Inactive => "inactive",
            Status::Locked => "locked",
            Status::PendingCreate => "pending create",
            Status::PendingRenew => "pending renew",
            Status::PendingTransfer => "pending transfer",
            Status::PendingUpdate => "pending update",
            Status::PendingDelete => "pending delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    Registration,
    Reregistration,
    LastChanged,
    Expiration,
    Deletion,
    Reinstantiation,
    Transfer,
    Locked,
    Unlocked,
}

impl CanonicalName for EventAction {
    const ALL: &'static [Self] = &[
        EventAction::Registration,
        EventAction::Reregistration,
        EventAction::LastChanged,
        EventAction::Expiration,
        EventAction::Deletion,
        EventAction::Reinstantiation,
        EventAction::Transfer,
        EventAction::Locked,
        EventAction::Unlocked,
    ];

    fn canonical_name(&self) -> &'static str {
        match self {
            EventAction::Registration => "registration",
            EventAction::Reregistration => "reregistration",
            EventAction::LastChanged => "last changed",
            EventAction::Expiration => "expiration",
            EventAction::Deletion => "deletion",
            EventAction::Reinstantiation => "reinstantiation",
            EventAction::Transfer => "transfer",
            EventAction::Locked => "locked",
            EventAction::Unlocked => "unlocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRole {
    Registrant,
    Technical,
    Administrative,
    Abuse,
    Billing,
    Registrar,
    Reseller,
    Sponsor,
    Proxy,
    Notifications,
    Noc,
}

impl CanonicalName for EntityRole {
    const ALL: &'static [Self] = &[
        EntityRole::Registrant,
        EntityRole::Technical,
        EntityRole::Administrative,
        EntityRole::Abuse,
        EntityRole::Billing,
        EntityRole::Registrar,
        EntityRole::Reseller,
        EntityRole::Sponsor,
        EntityRole::Proxy,
        EntityRole::Notifications,
        EntityRole::Noc,
    ];

    fn canonical_name(&self) -> &'static str {
        match self {
            EntityRole::Registrant => "registrant",
            EntityRole::Technical => "technical",
            EntityRole::Administrative => "administrative",
            EntityRole::Abuse => "abuse",
            EntityRole::Billing => "billing",
            EntityRole::Registrar => "registrar",
            EntityRole::Reseller => "reseller",
            EntityRole::Sponsor => "sponsor",
            EntityRole::Proxy => "proxy",
            EntityRole::Notifications => "notifications",
            EntityRole::Noc => "noc",
        }
    }
}
