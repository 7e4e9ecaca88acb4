//! Built-in starter sources.
//!
//! When `create` is called without `--contract`/`--test`, the scaffold service
//! asks a [`StarterStore`] for a starting point. The sources below carry
//! `{{VARIABLE}}` placeholders and the NatSpec header the docs generator
//! reads, so a fresh example documents itself from the first run.

use tracing::debug;

use fhex_core::{
    application::ports::StarterStore,
    domain::{Category, ExampleSources},
    error::HubResult,
};

const CONTRACT_HEADER: &str = r#"// SPDX-License-Identifier: BSD-3-Clause-Clear
pragma solidity ^0.8.24;

import {FHE, ebool, euint32, externalEuint32} from "@fhevm/solidity/lib/FHE.sol";
import {SepoliaConfig} from "@fhevm/solidity/config/ZamaConfig.sol";

/// @title {{CONTRACT_NAME}}
/// @notice {{DESCRIPTION}}
/// @dev {{CATEGORY_TITLE}} example. Key concepts:
"#;

const CONTRACT_TAGS: &str = r#"/// @custom:category {{CATEGORY}}
/// @custom:difficulty {{DIFFICULTY}}
contract {{CONTRACT_NAME}} is SepoliaConfig {
"#;

const TEST_SOURCE: &str = r#"import { expect } from "chai";
import { ethers, fhevm } from "hardhat";

describe("{{CONTRACT_NAME}}", function () {
  before(function () {
    if (!fhevm.isMock) {
      this.skip();
    }
  });

  it("deploys", async function () {
    const [deployer] = await ethers.getSigners();
    const factory = await ethers.getContractFactory("{{CONTRACT_NAME}}");
    const contract = await factory.connect(deployer).deploy();
    await contract.waitForDeployment();

    expect(await contract.getAddress()).to.be.properAddress;
  });
});
"#;

/// Starters compiled into the binary, one contract body per category.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStarters;

impl BuiltinStarters {
    pub fn new() -> Self {
        Self
    }

    fn concepts(category: Category) -> &'static [&'static str] {
        match category {
            Category::Basic => &[
                "encrypted state with euint32",
                "homomorphic addition with FHE.add",
            ],
            Category::Encryption => &[
                "accepting externalEuint32 inputs with an input proof",
                "FHE.fromExternal to validate ciphertexts",
            ],
            Category::Decryption => &[
                "granting the caller access with FHE.allow",
                "user decryption off-chain through the relayer",
            ],
            Category::AccessControl => &[
                "persistent grants with FHE.allow",
                "transaction-scoped grants with FHE.allowTransient",
            ],
            Category::AntiPatterns => &[
                "forgetting FHE.allowThis breaks later transactions",
                "branching on encrypted values with FHE.select instead of if",
            ],
            Category::Advanced => &[
                "encrypted comparisons with FHE.gt",
                "oblivious updates with FHE.select",
            ],
        }
    }

    fn body(category: Category) -> &'static str {
        match category {
            Category::Basic => {
                r#"    euint32 private _count;

    function increment(externalEuint32 amount, bytes calldata inputProof) external {
        _count = FHE.add(_count, FHE.fromExternal(amount, inputProof));
        FHE.allowThis(_count);
        FHE.allow(_count, msg.sender);
    }

    function getCount() external view returns (euint32) {
        return _count;
    }
}
"#
            }
            Category::Encryption => {
                r#"    mapping(address => euint32) private _values;

    function store(externalEuint32 value, bytes calldata inputProof) external {
        euint32 v = FHE.fromExternal(value, inputProof);
        _values[msg.sender] = v;
        FHE.allowThis(v);
        FHE.allow(v, msg.sender);
    }

    function valueOf(address owner) external view returns (euint32) {
        return _values[owner];
    }
}
"#
            }
            Category::Decryption => {
                r#"    euint32 private _secret;

    function setSecret(externalEuint32 value, bytes calldata inputProof) external {
        _secret = FHE.fromExternal(value, inputProof);
        FHE.allowThis(_secret);
        FHE.allow(_secret, msg.sender);
    }

    function secret() external view returns (euint32) {
        return _secret;
    }
}
"#
            }
            Category::AccessControl => {
                r#"    euint32 private _balance;

    function deposit(externalEuint32 amount, bytes calldata inputProof) external {
        _balance = FHE.add(_balance, FHE.fromExternal(amount, inputProof));
        FHE.allowThis(_balance);
        FHE.allow(_balance, msg.sender);
    }

    function share(address viewer) external {
        require(FHE.isSenderAllowed(_balance), "not allowed");
        FHE.allow(_balance, viewer);
    }
}
"#
            }
            Category::AntiPatterns => {
                r#"    euint32 private _total;

    function add(externalEuint32 amount, bytes calldata inputProof) external {
        _total = FHE.add(_total, FHE.fromExternal(amount, inputProof));
        // Without this grant the contract cannot reuse _total next time.
        FHE.allowThis(_total);
    }

    function capped(euint32 limit) external returns (euint32) {
        ebool over = FHE.gt(_total, limit);
        euint32 result = FHE.select(over, limit, _total);
        FHE.allow(result, msg.sender);
        return result;
    }
}
"#
            }
            Category::Advanced => {
                r#"    euint32 private _highest;
    address private _leader;

    function bid(externalEuint32 amount, bytes calldata inputProof) external {
        euint32 value = FHE.fromExternal(amount, inputProof);
        ebool higher = FHE.gt(value, _highest);
        _highest = FHE.select(higher, value, _highest);
        FHE.allowThis(_highest);
        _leader = msg.sender;
    }

    function leader() external view returns (address) {
        return _leader;
    }
}
"#
            }
        }
    }

    fn contract(category: Category) -> String {
        let mut out = String::from(CONTRACT_HEADER);
        for concept in Self::concepts(category) {
            out.push_str("/// - ");
            out.push_str(concept);
            out.push('\n');
        }
        out.push_str(CONTRACT_TAGS);
        out.push_str(Self::body(category));
        out
    }
}

impl StarterStore for BuiltinStarters {
    fn starter(&self, category: Category) -> HubResult<ExampleSources> {
        debug!(%category, "Using built-in starter");
        Ok(ExampleSources::new(Self::contract(category), TEST_SOURCE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhex_core::domain::{ContractDoc, Difficulty, ExampleName, RenderContext};

    #[test]
    fn every_category_has_a_documented_starter() {
        let name = ExampleName::parse("demo-example").unwrap();
        for category in Category::ALL {
            let sources = BuiltinStarters.starter(category).unwrap();
            let ctx = RenderContext::new(&name, category, Difficulty::Intermediate, "A demo");
            let contract = ctx.render(&sources.contract);

            let doc = ContractDoc::parse(&contract);
            assert_eq!(doc.title.as_deref(), Some("DemoExample"));
            assert_eq!(doc.notice.as_deref(), Some("A demo"));
            assert_eq!(doc.category, Some(category));
            assert_eq!(doc.difficulty, Some(Difficulty::Intermediate));
            assert_eq!(doc.dev_bullets.len(), 2, "{category}");
            assert!(contract.contains("contract DemoExample is SepoliaConfig"));
            assert!(!contract.contains("{{"));
        }
    }

    #[test]
    fn test_source_names_the_contract() {
        let name = ExampleName::parse("fhe-counter").unwrap();
        let sources = BuiltinStarters.starter(Category::Basic).unwrap();
        let ctx = RenderContext::new(&name, Category::Basic, Difficulty::Beginner, "x");
        let test = ctx.render(&sources.test);
        assert!(test.contains("describe(\"FheCounter\""));
        assert!(test.contains("getContractFactory(\"FheCounter\")"));
    }

    #[test]
    fn starters_use_current_import_paths() {
        let sources = BuiltinStarters.starter(Category::Advanced).unwrap();
        assert!(sources.contract.contains("@fhevm/solidity/lib/FHE.sol"));
        assert!(!sources.contract.contains("TFHE.sol"));
    }
}
